use std::path::PathBuf;

use anyhow::{Context, bail};
use business::domain::product::form::ProductForm;

use crate::setup::dependency_injection::DependencyContainer;

pub mod dashboard;
pub mod products;
pub mod vendors;

pub const USAGE: &str = "\
Usage:
  inventory dashboard [QUERY]
  inventory vendors list [QUERY]
  inventory vendors add NAME
  inventory vendors rename ID NAME
  inventory vendors delete ID
  inventory products list [QUERY]
  inventory products add KEY=VALUE...
  inventory products edit ID KEY=VALUE...
  inventory products delete ID

Product keys: name, category, cost_price, selling_price, vendor, image (path to a picture)";

#[derive(Debug, PartialEq)]
pub enum Command {
    Dashboard { query: Option<String> },
    Vendors(VendorCommand),
    Products(ProductCommand),
    Help,
}

#[derive(Debug, PartialEq)]
pub enum VendorCommand {
    List { query: Option<String> },
    Add { name: String },
    Rename { id: String, name: String },
    Delete { id: String },
}

#[derive(Debug, PartialEq)]
pub enum ProductCommand {
    List { query: Option<String> },
    Add { fields: ProductFields },
    Edit { id: String, fields: ProductFields },
    Delete { id: String },
}

/// Product form values given on the command line; `None` leaves a field as is.
#[derive(Debug, Default, PartialEq)]
pub struct ProductFields {
    pub name: Option<String>,
    pub category: Option<String>,
    pub cost_price: Option<String>,
    pub selling_price: Option<String>,
    pub vendor: Option<String>,
    pub image: Option<PathBuf>,
}

impl ProductFields {
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut fields = Self::default();
        for arg in args {
            let (key, value) = arg
                .split_once('=')
                .with_context(|| format!("Expected KEY=VALUE, got '{}'", arg))?;
            let value = value.to_string();
            match key.trim() {
                "name" => fields.name = Some(value),
                "category" => fields.category = Some(value),
                "cost_price" | "costPrice" => fields.cost_price = Some(value),
                "selling_price" | "sellingPrice" => fields.selling_price = Some(value),
                "vendor" => fields.vendor = Some(value),
                "image" => fields.image = Some(PathBuf::from(value)),
                other => bail!("Unknown product field '{}'", other),
            }
        }
        Ok(fields)
    }

    pub fn apply(&self, form: &mut ProductForm) {
        let targets = [
            (&self.name, &mut form.name),
            (&self.category, &mut form.category),
            (&self.cost_price, &mut form.cost_price),
            (&self.selling_price, &mut form.selling_price),
            (&self.vendor, &mut form.vendor),
        ];
        for (value, target) in targets {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
    }
}

fn query(rest: &[String]) -> Option<String> {
    let query = rest.join(" ");
    (!query.trim().is_empty()).then_some(query)
}

fn required<'a>(rest: &'a [String], what: &str) -> anyhow::Result<&'a String> {
    rest.first()
        .with_context(|| format!("Missing {}\n\n{}", what, USAGE))
}

impl Command {
    /// Parses the arguments that follow the program name.
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let Some((resource, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };

        match resource.as_str() {
            "dashboard" => Ok(Command::Dashboard { query: query(rest) }),
            "vendors" => Self::parse_vendors(rest).map(Command::Vendors),
            "products" => Self::parse_products(rest).map(Command::Products),
            "help" | "--help" | "-h" => Ok(Command::Help),
            other => bail!("Unknown command '{}'\n\n{}", other, USAGE),
        }
    }

    fn parse_vendors(args: &[String]) -> anyhow::Result<VendorCommand> {
        let (action, rest) = args.split_first().map_or(("list", &[][..]), |(a, r)| (a.as_str(), r));

        match action {
            "list" => Ok(VendorCommand::List { query: query(rest) }),
            "add" => Ok(VendorCommand::Add {
                name: rest.join(" "),
            }),
            "rename" => {
                let id = required(rest, "vendor id")?.clone();
                Ok(VendorCommand::Rename {
                    id,
                    name: rest[1..].join(" "),
                })
            }
            "delete" => Ok(VendorCommand::Delete {
                id: required(rest, "vendor id")?.clone(),
            }),
            other => bail!("Unknown vendors action '{}'\n\n{}", other, USAGE),
        }
    }

    fn parse_products(args: &[String]) -> anyhow::Result<ProductCommand> {
        let (action, rest) = args.split_first().map_or(("list", &[][..]), |(a, r)| (a.as_str(), r));

        match action {
            "list" => Ok(ProductCommand::List { query: query(rest) }),
            "add" => Ok(ProductCommand::Add {
                fields: ProductFields::parse(rest)?,
            }),
            "edit" => {
                let id = required(rest, "product id")?.clone();
                Ok(ProductCommand::Edit {
                    id,
                    fields: ProductFields::parse(&rest[1..])?,
                })
            }
            "delete" => Ok(ProductCommand::Delete {
                id: required(rest, "product id")?.clone(),
            }),
            other => bail!("Unknown products action '{}'\n\n{}", other, USAGE),
        }
    }
}

pub async fn run(command: Command, container: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        Command::Dashboard { query } => dashboard::show(container, query.as_deref()).await,
        Command::Vendors(command) => vendors::run(command, container).await,
        Command::Products(command) => products::run(command, container).await,
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}
