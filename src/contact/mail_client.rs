use std::time::Duration;

use async_trait::async_trait;

use super::{mailto, ContactError, ContactPayload, ResetPolicy, SubmitOutcome, SubmitStrategy};

pub const OPENING_TITLE: &str = "Opening Email Client";
pub const OPENING_MESSAGE: &str =
    "Your default email application will open with the message pre-filled.";
pub const LAUNCH_FAILED_MESSAGE: &str = "Could not open your email client. Please email directly.";

/// Hands a `mailto:` URI to whatever opens mail on this platform.
pub trait MailLauncher {
    fn launch(&self, uri: &str) -> Result<(), ContactError>;
}

impl<F> MailLauncher for F
where
    F: Fn(&str) -> Result<(), ContactError>,
{
    fn launch(&self, uri: &str) -> Result<(), ContactError> {
        self(uri)
    }
}

/// Opens mail through a transient hidden anchor, which browsers follow more
/// reliably than a `location` change.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLauncher;

impl MailLauncher for BrowserLauncher {
    #[cfg(feature = "hydrate")]
    fn launch(&self, uri: &str) -> Result<(), ContactError> {
        use wasm_bindgen::JsCast;

        let launch_err = |e: wasm_bindgen::JsValue| ContactError::Launch(format!("{e:?}"));
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ContactError::Launch("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| ContactError::Launch("no body".to_string()))?;

        let anchor = document.create_element("a").map_err(launch_err)?;
        anchor.set_attribute("href", uri).map_err(launch_err)?;
        anchor
            .set_attribute("style", "display: none")
            .map_err(launch_err)?;
        body.append_child(&anchor).map_err(launch_err)?;
        if let Some(el) = anchor.dyn_ref::<web_sys::HtmlElement>() {
            el.click();
        }
        body.remove_child(&anchor).map_err(launch_err)?;
        Ok(())
    }

    #[cfg(not(feature = "hydrate"))]
    fn launch(&self, _uri: &str) -> Result<(), ContactError> {
        Err(ContactError::Launch("no browser available".to_string()))
    }
}

/// Pre-fills a message in the visitor's own mail client.
pub struct MailClientStrategy<L> {
    address: String,
    launcher: L,
    reset_after: Duration,
}

impl<L: MailLauncher> MailClientStrategy<L> {
    pub fn new(address: impl Into<String>, launcher: L, reset_after: Duration) -> Self {
        Self {
            address: address.into(),
            launcher,
            reset_after,
        }
    }

    /// Opens a blank message to the site owner.
    pub fn open_direct(&self) -> Result<(), ContactError> {
        self.launcher.launch(&mailto::direct(&self.address))
    }
}

#[async_trait(?Send)]
impl<L: MailLauncher> SubmitStrategy for MailClientStrategy<L> {
    async fn submit(&self, payload: &ContactPayload) -> SubmitOutcome {
        let uri = mailto::compose(&self.address, payload);
        match self.launcher.launch(&uri) {
            Ok(()) => SubmitOutcome::success(
                OPENING_TITLE,
                OPENING_MESSAGE,
                ResetPolicy::After(self.reset_after),
            ),
            Err(e) => {
                log::warn!("{e}");
                SubmitOutcome::failure(LAUNCH_FAILED_MESSAGE)
            }
        }
    }
}
