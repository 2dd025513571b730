pub mod application {
    pub mod dashboard;
    pub mod form_session;
    pub mod image_intake;
    pub mod list_store;
}

pub mod domain {
    pub mod errors;
    pub mod filter;
    pub mod gateway;
    pub mod logger;
    pub mod form {
        pub mod errors;
        pub mod model;
    }
    pub mod image {
        pub mod errors;
        pub mod model;
        pub mod preview;
        pub mod services;
    }
    pub mod product {
        pub mod form;
        pub mod model;
        pub mod pricing;
        pub mod value_objects;
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod vendor {
        pub mod form;
        pub mod model;
    }
}
