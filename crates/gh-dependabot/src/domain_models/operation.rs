use super::ReviewUnit;
use gh_dependabot_client::MergeMethod;

/// A background operation the commander can run against a review unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Merge(MergeMethod),
    Rebase,
    Recreate,
    Close,
    Browse,
    CopyCheckout,
}

impl Operation {
    /// Whether the operation is counted by the operation tracker while it runs
    pub fn is_tracked(&self) -> bool {
        matches!(self, Self::Merge(_) | Self::Rebase | Self::Recreate)
    }

    /// Whether dispatching the operation takes the unit off the list
    pub fn removes_unit(&self) -> bool {
        matches!(self, Self::Merge(_) | Self::Close)
    }

    /// Name used as the status message source
    pub fn label(&self) -> &'static str {
        match self {
            Self::Merge(_) => "Merge",
            Self::Rebase => "Rebase",
            Self::Recreate => "Recreate",
            Self::Close => "Close",
            Self::Browse => "Browse",
            Self::CopyCheckout => "Copy",
        }
    }

    pub fn running_message(&self, unit: &ReviewUnit) -> String {
        match self {
            Self::Merge(method) => format!("Merging {} ({})...", unit, method.label()),
            Self::Rebase => format!("Requesting rebase of {}...", unit),
            Self::Recreate => format!("Requesting recreate of {}...", unit),
            Self::Close => format!("Closing {}...", unit),
            Self::Browse => format!("Opening {}...", unit.url),
            Self::CopyCheckout => format!("Copying checkout command for {}...", unit),
        }
    }

    pub fn success_message(&self, unit: &ReviewUnit) -> String {
        match self {
            Self::Merge(MergeMethod::Dependabot) => {
                format!("Approved, Dependabot will merge {}", unit.url)
            }
            Self::Merge(method) => format!("Merged {} ({})", unit.url, method.label()),
            Self::Rebase => format!("Rebase requested for {}", unit.url),
            Self::Recreate => format!("Recreate requested for {}", unit.url),
            Self::Close => format!("Closed {}", unit.url),
            Self::Browse => format!("Opened {}", unit.url),
            Self::CopyCheckout => format!("Copied `{}`", unit.checkout_command()),
        }
    }
}
