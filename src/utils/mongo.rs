use std::fs;
use tracing::{debug, info};
use crate::utils::{config::Configuration, errors::InternalError};
use mongodb::{Client, bson::{Document, doc}, options::{ClientOptions, ServerApi, ServerApiVersion}};

///
/// Build the connection URI, substituting any credentials from the configured secrets file.
///
pub fn mongo_uri(config: &Configuration) -> Result<String, InternalError> {
    match &config.mongo_credentials {
        Some(filename) => {
            debug!("Loading MongoDB credentials from secrets file {}", filename);

            // Read username and password from a secrets file.
            let credentials = fs::read_to_string(filename).map_err(|err| InternalError::UnableToReadCredentials{ cause: err.to_string() })?;
            Ok(fill_credentials(&config.mongo_uri, &credentials))
        },
        None => Ok(config.mongo_uri.clone()),
    }
}

///
/// Replace the $USERNAME and $PASSWORD placeholders with the first and second lines of the credentials.
///
pub fn fill_credentials(uri: &str, credentials: &str) -> String {
    let mut credentials = credentials.lines();
    let uri = uri.replace("$USERNAME", credentials.next().unwrap_or_default());
    uri.replace("$PASSWORD", credentials.next().unwrap_or_default())
}

///
/// Create a MongoDB client and ping the deployment before returning it. A client that can't
/// ping is an error - the service shouldn't start without its database.
///
pub async fn get_mongo_client(app_name: &str, config: &Configuration) -> Result<Client, InternalError> {

    // Parse the uri now.
    let mut client_options = ClientOptions::parse(mongo_uri(config)?).await?;

    // Manually set some options.
    client_options.app_name = Some(app_name.to_string());
    client_options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

    // Get a handle to the deployment.
    let client = Client::with_options(client_options)?;

    info!("Connecting to MongoDB...");

    ping(&client).await?;

    info!("Pinged your deployment. Connected to MongoDB");
    Ok(client)
}

pub async fn ping(client: &Client) -> Result<Document, InternalError> {
    Ok(client.database("admin").run_command(doc! { "ping": 1 }, None).await?)
}
