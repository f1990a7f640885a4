//! Sample app registry.
//!
//! The registry is a static, ordered list of descriptors. Order matters:
//! `gonut push all` walks it front to back.

use std::fmt;

/// Length of the random suffix appended to generated app names.
pub const APP_NAME_SUFFIX_LEN: usize = 32;

/// Identifies which embedded sample app payload a descriptor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleAppKind {
    Golang,
    Python,
    Php,
    Staticfile,
    Swift,
    NodeJs,
    Ruby,
}

impl SampleAppKind {
    /// Directory name of the embedded payload for this kind.
    #[must_use]
    pub fn asset_dir(self) -> &'static str {
        match self {
            Self::Golang => "golang",
            Self::Python => "python",
            Self::Php => "php",
            Self::Staticfile => "staticfile",
            Self::Swift => "swift",
            Self::NodeJs => "nodejs",
            Self::Ruby => "ruby",
        }
    }
}

impl fmt::Display for SampleAppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_dir())
    }
}

/// A sample app that can be pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleApp {
    /// Display name, e.g. `"Golang"`.
    pub caption: &'static str,
    /// Sub-command name and lookup key.
    pub command: &'static str,
    /// Additional sub-command names.
    pub aliases: &'static [&'static str],
    /// Prefix of the generated app name.
    pub app_name_prefix: &'static str,
    /// Payload the asset provider resolves for this app.
    pub asset: SampleAppKind,
}

pub static SAMPLE_APPS: &[SampleApp] = &[
    SampleApp {
        caption: "Golang",
        command: "golang",
        aliases: &["go"],
        app_name_prefix: "gonut-golang-app-",
        asset: SampleAppKind::Golang,
    },
    SampleApp {
        caption: "Python",
        command: "python",
        aliases: &[],
        app_name_prefix: "gonut-python-app-",
        asset: SampleAppKind::Python,
    },
    SampleApp {
        caption: "PHP",
        command: "php",
        aliases: &[],
        app_name_prefix: "gonut-php-app-",
        asset: SampleAppKind::Php,
    },
    SampleApp {
        caption: "Staticfile",
        command: "staticfile",
        aliases: &["static"],
        app_name_prefix: "gonut-staticfile-app-",
        asset: SampleAppKind::Staticfile,
    },
    SampleApp {
        caption: "Swift",
        command: "swift",
        aliases: &[],
        app_name_prefix: "gonut-swift-app-",
        asset: SampleAppKind::Swift,
    },
    SampleApp {
        caption: "NodeJS",
        command: "nodejs",
        aliases: &["node"],
        app_name_prefix: "gonut-nodejs-app-",
        asset: SampleAppKind::NodeJs,
    },
    SampleApp {
        caption: "Ruby",
        command: "ruby",
        aliases: &[],
        app_name_prefix: "gonut-ruby-sinatra-app-",
        asset: SampleAppKind::Ruby,
    },
];

/// Find a sample app by its command name.
///
/// Aliases are not matched here; clap resolves them to the command name
/// before dispatch.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static SampleApp> {
    lookup_in(SAMPLE_APPS, name)
}

/// Find a sample app by command name in an arbitrary registry.
#[must_use]
pub fn lookup_in<'a>(registry: &'a [SampleApp], name: &str) -> Option<&'a SampleApp> {
    registry.iter().find(|app| app.command == name)
}

/// Generate a unique app name: `prefix` followed by 32 random
/// lowercase alphanumeric characters.
#[must_use]
pub fn generate_app_name(prefix: &str) -> String {
    format!("{prefix}{}", uuid::Uuid::new_v4().simple())
}
