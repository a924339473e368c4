use web_sys::window;
use yew::prelude::*;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Text colour of the sequence-number column.
    pub fn sequence_text_class(self) -> &'static str {
        match self {
            Theme::Light => "text-black",
            Theme::Dark => "text-white",
        }
    }
}

pub fn get_stored_theme() -> Option<Theme> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(THEME_KEY).ok())
        .flatten()
        .and_then(|value| Theme::parse(&value))
}

pub fn store_theme(theme: Theme) -> Result<(), String> {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            storage
                .set_item(THEME_KEY, theme.as_str())
                .map_err(|_| "Failed to store theme".to_string())?;
        }
    }
    Ok(())
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn initial_theme() -> Theme {
    get_stored_theme().unwrap_or_else(|| {
        if system_prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if root
        .class_list()
        .toggle_with_force("dark", theme == Theme::Dark)
        .is_err()
    {
        log::warn!("Could not apply {} theme", theme.as_str());
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> Theme {
    use_context::<ThemeContext>()
        .map(|ctx| ctx.theme)
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(initial_theme);

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        if let Err(e) = store_theme(*theme) {
            log::warn!("{e}");
        }
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            log::debug!("Switching to {} theme", theme.toggled().as_str());
            theme.set(theme.toggled());
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Theme::parse("Dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light "), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn toggling_flips_sequence_colour() {
        let theme = Theme::default();
        assert_eq!(theme.sequence_text_class(), "text-black");
        assert_eq!(theme.toggled().sequence_text_class(), "text-white");
        assert_eq!(theme.toggled().toggled(), theme);
        assert_eq!(Theme::parse(theme.toggled().as_str()), Some(Theme::Dark));
    }
}
