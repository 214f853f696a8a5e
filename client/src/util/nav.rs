//! Route table for the site and path-to-page lookup for the header.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Every routed page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    About,
    Programs,
    Governance,
    Policies,
    GetInvolved,
    Contact,
}

impl SitePage {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::Programs,
        Self::Governance,
        Self::Policies,
        Self::GetInvolved,
        Self::Contact,
    ];

    /// Pages listed in the header and footer navigation (home is the logo).
    pub const NAV: [Self; 6] =
        [Self::About, Self::Programs, Self::Governance, Self::Policies, Self::GetInvolved, Self::Contact];

    /// Router segment (empty for home).
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::About => "about",
            Self::Programs => "programs",
            Self::Governance => "governance",
            Self::Policies => "policies",
            Self::GetInvolved => "get-involved",
            Self::Contact => "contact",
        }
    }

    /// Absolute path used in links.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Programs => "/programs",
            Self::Governance => "/governance",
            Self::Policies => "/policies",
            Self::GetInvolved => "/get-involved",
            Self::Contact => "/contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Programs => "Programs",
            Self::Governance => "Governance",
            Self::Policies => "Policies",
            Self::GetInvolved => "Get Involved",
            Self::Contact => "Contact",
        }
    }

    /// Page served at `path`, if any.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize_path(path);
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// Drop any query/fragment and trailing slashes; the root stays `/`.
fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
