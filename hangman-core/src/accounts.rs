use hangman_types::{HangmanError, Player};
use tracing::{info, warn};

use crate::AccountStore;

pub async fn login<A>(store: &A, name: &str, secret: &str) -> Result<Player, HangmanError>
where
    A: AccountStore + ?Sized,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(HangmanError::NotFound);
    }

    let id = store
        .verify_credentials(name, secret)
        .await
        .inspect_err(|e| warn!("Login failed for {:?}: {}", name, e))?;

    info!("Player {} logged in", name);
    Ok(Player {
        id,
        display_name: name.to_string(),
    })
}

pub async fn register<A>(store: &A, name: &str, secret: &str) -> Result<Player, HangmanError>
where
    A: AccountStore + ?Sized,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(HangmanError::InvalidName);
    }

    let id = store.register(name, secret).await?;

    info!("Registered player {}", name);
    Ok(Player {
        id,
        display_name: name.to_string(),
    })
}
