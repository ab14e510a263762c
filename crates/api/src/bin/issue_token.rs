//! Print a signed access token for local development.
//!
//! ```text
//! animal-rescue-token <username> [authority...]
//! ```
//!
//! With no authorities given, the token carries `adoption.request`.
//! Uses the same `JWT_SECRET` / `JWT_ACCESS_EXPIRY_MINS` as the server.

use animal_rescue_api::auth::jwt::{generate_access_token, JwtConfig};
use animal_rescue_core::authorities::AUTHORITY_ADOPTION_REQUEST;

fn main() {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let Some(username) = args.next() else {
        eprintln!("usage: animal-rescue-token <username> [authority...]");
        std::process::exit(2);
    };

    let mut authorities: Vec<String> = args.collect();
    if authorities.is_empty() {
        authorities.push(AUTHORITY_ADOPTION_REQUEST.to_string());
    }

    let config = JwtConfig::from_env();
    match generate_access_token(&username, &authorities, &config) {
        Ok(token) => println!("{token}"),
        Err(e) => {
            eprintln!("failed to sign token: {e}");
            std::process::exit(1);
        }
    }
}
