use anyhow::anyhow;

use business::application::list_store::EntityListStore;
use business::domain::shared::value_objects::EntityId;
use business::domain::vendor::model::Vendor;

use crate::commands::VendorCommand;
use crate::error_mapper::IntoUserMessage;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(command: VendorCommand, container: &DependencyContainer) -> anyhow::Result<()> {
    let mut store = container.vendor_store();

    match command {
        VendorCommand::List { query } => {
            load(&mut store).await?;
            print_vendors(&store, query.as_deref().unwrap_or_default());
        }
        VendorCommand::Add { name } => {
            let mut session = container.vendor_session();
            session.start_create();
            session.fields_mut().name = name;

            let vendor = session
                .submit(&mut store)
                .await
                .map_err(|e| anyhow!(e.into_user_message()))?;
            println!("Created vendor {} ({})", vendor.name, vendor.id);
            print_vendors(&store, "");
        }
        VendorCommand::Rename { id, name } => {
            load(&mut store).await?;
            let current = find(&store, &id)?;

            let mut session = container.vendor_session();
            session.start_edit(&current);
            session.fields_mut().name = name;

            let vendor = session
                .submit(&mut store)
                .await
                .map_err(|e| anyhow!(e.into_user_message()))?;
            println!("Renamed vendor {} to {}", current.name, vendor.name);
        }
        VendorCommand::Delete { id } => {
            store
                .remove(&EntityId::new(id.as_str()))
                .await
                .map_err(|e| anyhow!(e.into_user_message()))?;
            println!("Deleted vendor {}", id);
            print_vendors(&store, "");
        }
    }
    Ok(())
}

async fn load(store: &mut EntityListStore<Vendor>) -> anyhow::Result<()> {
    store
        .refresh()
        .await
        .map_err(|e| anyhow!(e.into_user_message()))
}

fn find(store: &EntityListStore<Vendor>, id: &str) -> anyhow::Result<Vendor> {
    store
        .find(&EntityId::new(id))
        .cloned()
        .ok_or_else(|| anyhow!("No vendor with id {}", id))
}

fn print_vendors(store: &EntityListStore<Vendor>, query: &str) {
    let vendors = store.filtered(query);
    if vendors.is_empty() {
        println!("No vendors.");
        return;
    }
    for vendor in vendors {
        println!("{}  {}", vendor.id, vendor.name);
    }
}
