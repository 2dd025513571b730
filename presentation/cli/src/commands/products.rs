use anyhow::{Context, anyhow};

use business::application::form_session::FormSession;
use business::application::image_intake::ImageIntake;
use business::domain::image::model::SelectedImage;
use business::domain::product::form::ProductForm;
use business::domain::shared::value_objects::EntityId;

use crate::commands::dashboard::product_line;
use crate::commands::{ProductCommand, ProductFields};
use crate::error_mapper::{IntoUserMessage, describe_code};
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(command: ProductCommand, container: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        ProductCommand::List { query } => {
            // Vendors are loaded too so bare vendor ids can be shown by name.
            let mut dashboard = container.dashboard();
            dashboard.mount().await;
            if let Some(code) = dashboard.products.error() {
                return Err(anyhow!(describe_code(code)));
            }

            let products = dashboard.search_products(query.as_deref().unwrap_or_default());
            if products.is_empty() {
                println!("No products.");
            }
            for product in products {
                println!("{}", product_line(product, dashboard.vendors.items()));
            }
        }
        ProductCommand::Add { fields } => {
            let mut store = container.product_store();
            let mut session = container.product_session();
            session.start_create();
            fill(&mut session, &fields, &container.image_intake).await?;

            let product = session
                .submit(&mut store)
                .await
                .map_err(|e| anyhow!(e.into_user_message()))?;
            println!("Created product {} ({})", product.name, product.id);
        }
        ProductCommand::Edit { id, fields } => {
            let mut store = container.product_store();
            store
                .refresh()
                .await
                .map_err(|e| anyhow!(e.into_user_message()))?;
            let current = store
                .find(&EntityId::new(id.as_str()))
                .cloned()
                .ok_or_else(|| anyhow!("No product with id {}", id))?;

            let mut session = container.product_session();
            session.start_edit(&current);
            fill(&mut session, &fields, &container.image_intake).await?;

            let product = session
                .submit(&mut store)
                .await
                .map_err(|e| anyhow!(e.into_user_message()))?;
            println!("Updated product {} ({})", product.name, product.id);
        }
        ProductCommand::Delete { id } => {
            let mut store = container.product_store();
            store
                .remove(&EntityId::new(id.as_str()))
                .await
                .map_err(|e| anyhow!(e.into_user_message()))?;
            println!(
                "Deleted product {}, {} remaining",
                id,
                store.items().len()
            );
        }
    }
    Ok(())
}

/// Applies command line values to the form and routes `image=` through the intake.
async fn fill(
    session: &mut FormSession<ProductForm>,
    fields: &ProductFields,
    intake: &ImageIntake,
) -> anyhow::Result<()> {
    fields.apply(session.fields_mut());

    let Some(path) = &fields.image else {
        return Ok(());
    };
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Could not read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let accepted = intake
        .accept(SelectedImage { file_name, bytes })
        .await
        .map_err(|e| anyhow!(e.into_user_message()))?;
    println!(
        "Image compressed to {} bytes ({}x{})",
        accepted.image.size(),
        accepted.image.width,
        accepted.image.height
    );
    let preview = accepted.preview.clone();
    session
        .attach_image(accepted)
        .map_err(|e| anyhow!(e.into_user_message()))?;
    if let Some(bytes) = intake.previews().resolve(&preview) {
        println!("Preview {} ({} bytes)", preview.url(), bytes.len());
    }
    Ok(())
}
