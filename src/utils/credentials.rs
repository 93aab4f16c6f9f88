//! Credential resolution: flags → env → .env in cwd → prompt.

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::io::{self, Write};

const USER_ENV_KEY: &str = "FTPFIND_USER";
const PASSWORD_ENV_KEY: &str = "FTPFIND_PASSWORD";

/// Resolved login pair handed to the session provider.
pub struct Credentials {
    pub user: String,
    pub password: String,
}

fn try_env_then_dotenv(key: &str) -> Option<String> {
    if let Ok(s) = std::env::var(key) {
        let s = s.trim().to_string();
        if !s.is_empty() {
            return Some(s);
        }
    }
    let env_path = std::path::Path::new(".env");
    if env_path.is_file() {
        let _ = dotenvy::from_path(env_path);
        if let Ok(s) = std::env::var(key) {
            let s = s.trim().to_string();
            if !s.is_empty() {
                return Some(s);
            }
        }
    }
    None
}

fn prompt_label() -> colored::ColoredString {
    format!("[{}]", env!("CARGO_PKG_NAME")).cyan().bold()
}

fn prompt_plain(prompt: &str) -> Result<String> {
    eprint!("{} {}", prompt_label(), prompt);
    io::stderr().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s).context("read user name")?;
    Ok(s.trim().to_string())
}

/// Resolve the login pair: explicit flags win, then FTPFIND_USER /
/// FTPFIND_PASSWORD from the environment or a `.env` in the working
/// directory, then an interactive prompt. An empty user falls back to
/// `anonymous`; an empty password is allowed (anonymous-style servers).
pub fn resolve_credentials(user: Option<&str>, password: Option<&str>) -> Result<Credentials> {
    let user = match user {
        Some(u) => u.to_string(),
        None => match try_env_then_dotenv(USER_ENV_KEY) {
            Some(u) => {
                info!("User name found in environment");
                u
            }
            None => prompt_plain("User name: ")?,
        },
    };
    let user = if user.is_empty() {
        "anonymous".to_string()
    } else {
        user
    };

    let password = match password {
        Some(p) => p.to_string(),
        None => match try_env_then_dotenv(PASSWORD_ENV_KEY) {
            Some(p) => {
                info!("Password found in environment");
                p
            }
            None => rpassword::prompt_password(format!("{} Password: ", prompt_label()))
                .context("read password")?
                .trim()
                .to_string(),
        },
    };

    Ok(Credentials { user, password })
}
