use clap::{crate_authors, crate_description, crate_name, crate_version, Arg, Command};
use dotenv::dotenv;
use env_logger::Env;
use log::{debug, info};
use reddmodels::utils::{mask_sensitive, read_payload};
use reddmodels::{parse, parse_error, IdentityResult, Item, ItemPage, ReddModelsError, TokenRefreshResult};
use std::path::Path;

fn main() -> Result<(), ReddModelsError> {
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("kind")
                .value_name("KIND")
                .help("Shape of the payload")
                .value_parser(["error", "token", "identity", "item", "listing"])
                .required(true),
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("JSON payload to decode, read from stdin if absent"),
        )
        .arg(
            Arg::new("status")
                .short('s')
                .long("status")
                .value_name("STATUS")
                .env("TRANSPORT_STATUS")
                .default_value("200")
                .help("HTTP status the error payload was received with"),
        )
        .get_matches();

    let kind = matches.get_one::<String>("kind").map(String::as_str).unwrap_or_default();
    let file = matches.get_one::<String>("file").map(Path::new);
    let payload = read_payload(file)?;
    debug!("Read {} bytes of {} payload", payload.len(), kind);

    let output = match kind {
        "error" => {
            let status: u16 = matches
                .get_one::<String>("status")
                .map(String::as_str)
                .unwrap_or("200")
                .parse()?;
            let err = parse_error(&payload, status)?;
            info!("API error: {} (HTTP {})", err, err.status);
            serde_json::to_string_pretty(&err)?
        }
        "token" => {
            let tokens = parse::<TokenRefreshResult>(&payload)?;
            info!("Access token: {}", mask_sensitive(&tokens.access_token));
            info!("Refresh token: {}", mask_sensitive(&tokens.refresh_token));
            // never print the tokens themselves
            let masked = TokenRefreshResult {
                access_token: mask_sensitive(&tokens.access_token),
                refresh_token: mask_sensitive(&tokens.refresh_token),
            };
            serde_json::to_string_pretty(&masked)?
        }
        "identity" => {
            let me = parse::<IdentityResult>(&payload)?;
            info!("Account name: {}", me.name);
            info!("Normalized username: {}", me.normalized_username());
            serde_json::to_string_pretty(&me)?
        }
        "item" => {
            let item = parse::<Item>(&payload)?;
            info!("Item: {} ({:?})", item.full_name(), item.item_kind());
            serde_json::to_string_pretty(&item)?
        }
        _ => {
            let page = parse::<ItemPage>(&payload)?;
            info!("Listing with {} items", page.count);
            for item in page.iter() {
                debug!("{} by {}", item.full_name(), item.author);
            }
            serde_json::to_string_pretty(&page)?
        }
    };

    println!("{}", output);

    Ok(())
}
