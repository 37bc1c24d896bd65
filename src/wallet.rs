use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("no wallet extension installed")]
    NotInstalled,
    #[error("wallet request rejected: {0}")]
    Rejected(String),
    #[error("wallet provider error: {0}")]
    Provider(String),
}

/// Handle to the browser-injected `window.ethereum` provider.
///
/// The provider is probed exactly once at startup via [`WalletCapability::detect`]
/// and handed down through context; nothing else in the app touches the
/// injected global directly.
#[derive(Clone)]
pub struct WalletCapability {
    #[cfg(feature = "web")]
    provider: wasm_bindgen::JsValue,
}

impl WalletCapability {
    /// Probes `window.ethereum`. Returns `None` when no extension is injected.
    pub fn detect() -> Option<Self> {
        #[cfg(feature = "web")]
        {
            use js_sys::Reflect;
            use wasm_bindgen::JsValue;

            let window = web_sys::window()?;
            let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
            if ethereum.is_undefined() || ethereum.is_null() {
                return None;
            }
            Some(Self { provider: ethereum })
        }

        #[cfg(not(feature = "web"))]
        {
            None
        }
    }

    /// `eth_requestAccounts` - prompts the user for account access.
    pub async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.request("eth_requestAccounts").await
    }

    /// `eth_accounts` - lists already-authorized accounts without prompting.
    pub async fn authorized_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.request("eth_accounts").await
    }

    #[cfg(feature = "web")]
    async fn request(&self, method: &str) -> Result<Vec<String>, WalletError> {
        use js_sys::{Array, Function, Object, Promise, Reflect};
        use wasm_bindgen::{JsCast, JsValue};

        let request_fn = Reflect::get(&self.provider, &JsValue::from_str("request"))
            .map_err(|_| WalletError::Provider("no request method".to_string()))?;

        let request_fn: Function = request_fn
            .dyn_into()
            .map_err(|_| WalletError::Provider("request is not a function".to_string()))?;

        let args = Object::new();
        Reflect::set(
            &args,
            &JsValue::from_str("method"),
            &JsValue::from_str(method),
        )
        .map_err(|e| WalletError::Provider(format!("{:?}", e)))?;

        let promise = request_fn
            .call1(&self.provider, &args)
            .map_err(|e| WalletError::Provider(format!("{} call failed: {:?}", method, e)))?;

        let promise: Promise = promise
            .dyn_into()
            .map_err(|_| WalletError::Provider("request did not return a promise".to_string()))?;

        let accounts = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| WalletError::Rejected(format!("{:?}", e)))?;

        let accounts: Array = accounts
            .dyn_into()
            .map_err(|_| WalletError::Provider("account list is not an array".to_string()))?;

        Ok(accounts.iter().filter_map(|v| v.as_string()).collect())
    }

    #[cfg(not(feature = "web"))]
    async fn request(&self, _method: &str) -> Result<Vec<String>, WalletError> {
        Err(WalletError::Provider(
            "wallet only available in web mode".to_string(),
        ))
    }
}

/// Blocking alert shown when a connect is attempted with no extension present.
pub fn alert_missing_wallet() {
    tracing::error!("{}", WalletError::NotInstalled);

    #[cfg(feature = "web")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("Get MetaMask!");
    }
}
