// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("available_locales", &self.available_locales)
            .finish_non_exhaustive()
    }
}

fn load_bundle(locale: &LanguageIdentifier, source: String) -> FluentBundle<FluentResource> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((partial, errors)) => {
            tracing::warn!(%locale, ?errors, "translation file has syntax errors");
            partial
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Isolation marks render as visible glyphs in the UI.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, ?errors, "duplicate translation keys");
    }
    bundle
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                bundles.insert(locale.clone(), load_bundle(&locale, source));
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(FALLBACK_LOCALE);
        tracing::debug!(locale = %current_locale, "locale selected");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.format(key, Some(&fluent_args))
    }

    /// Current locale first, then `en-US`, then a visible marker.
    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let locales = [&self.current_locale, &FALLBACK_LOCALE];
        for locale in locales {
            let Some(bundle) = self.bundles.get(locale) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.to_string();
            }
            tracing::debug!(key, ?errors, "translation formatting failed");
        }
        format!("MISSING: {}", key)
    }
}

fn parse_available(lang: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let parsed = lang.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&parsed) {
        return Some(parsed);
    }
    // "fr-CA" falls back to "fr".
    available
        .iter()
        .find(|candidate| candidate.language == parsed.language && candidate.region.is_none())
        .cloned()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if let Some(lang) = cli_lang.and_then(|lang| parse_available(&lang, available)) {
        return Some(lang);
    }
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|lang| parse_available(lang, available))
    {
        return Some(lang);
    }
    sys_locale::get_locale().and_then(|lang| parse_available(&lang, available))
}
