use anyhow::{Context, Result};
use staffa_client::Session;
use std::io::Write;

use crate::session_store;

/// Interactive login: prompt for email and password, exchange them for a
/// bearer token, persist the token for later runs.
pub async fn run_login(api_url: &str) -> Result<()> {
    print!("Email: ");
    std::io::stdout().flush()?;
    let mut email = String::new();
    std::io::stdin()
        .read_line(&mut email)
        .context("Failed to read email")?;
    let email = email.trim();

    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;

    let session = Session::login(api_url, email, &password)
        .await
        .with_context(|| format!("Login against {} failed", api_url))?;

    session_store::save_token(session.token())?;
    println!("Login successful. Token saved.");

    Ok(())
}
