use web_sys::window;

/// Blocking yes/no questions and notices shown to the user.
pub trait Prompter {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn confirm(&self, message: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        match window() {
            Some(w) => {
                if w.alert_with_message(message).is_err() {
                    log::error!("Could not show alert: {message}");
                }
            }
            None => log::error!("{message}"),
        }
    }
}
