use serde::Deserialize;

/// Outcome of a redeem-code availability lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Availability {
    /// No response yet.
    #[default]
    Pending,
    /// Code exists and can still be claimed.
    Available,
    /// Code was already claimed.
    Unavailable,
    /// Network failure or a status outside the documented pair.
    Error,
}

/// Maps the checker endpoint's HTTP status onto a UI outcome. Anything the
/// endpoint never documented is an explicit error, never a silent no-op.
pub fn map_status(status: u16) -> Availability {
    match status {
        200 => Availability::Available,
        201 => Availability::Unavailable,
        _ => Availability::Error,
    }
}

pub fn check_url(base_url: &str, id: &str) -> String {
    format!("{}/check/{}", base_url, id)
}

/// Issues the single availability request for a redeem code.
pub async fn check_code(base_url: &str, id: &str) -> Availability {
    let client = reqwest::Client::new();

    match client.get(check_url(base_url, id)).send().await {
        Ok(response) => map_status(response.status().as_u16()),
        Err(e) => {
            tracing::error!("Redeem check failed: {}", e);
            Availability::Error
        }
    }
}

/// Receipt returned by the mint endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MintReceipt {
    pub minted: String,
    pub address: String,
    pub id: String,
}

/// Asks the mint endpoint to mint the token behind `id` to `address`.
pub async fn mint_token(base_url: &str, id: &str, address: &str) -> Result<MintReceipt, String> {
    let url = format!("{}/mint/{}/{}", base_url, id, address);
    let client = reqwest::Client::new();

    let response = client.get(&url).send().await.map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("mint endpoint returned {}", response.status()));
    }

    response
        .json::<MintReceipt>()
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_code_is_available() {
        assert_eq!(map_status(200), Availability::Available);
    }

    #[test]
    fn claimed_code_is_unavailable() {
        assert_eq!(map_status(201), Availability::Unavailable);
    }

    #[test]
    fn undocumented_statuses_are_errors() {
        for status in [204, 301, 400, 404, 418, 500, 503] {
            assert_eq!(map_status(status), Availability::Error, "status {}", status);
        }
    }

    #[test]
    fn check_url_includes_the_code() {
        assert_eq!(
            check_url("https://checker.example.com", "abc123"),
            "https://checker.example.com/check/abc123"
        );
    }

    #[test]
    fn mint_receipt_shape() {
        let receipt: MintReceipt = serde_json::from_str(
            r#"{"minted":"something","address":"0xCAFE","id":"abc123"}"#,
        )
        .unwrap();

        assert_eq!(receipt.minted, "something");
        assert_eq!(receipt.address, "0xCAFE");
        assert_eq!(receipt.id, "abc123");
    }
}
