use std::fmt;

use super::super::domain::{Assessment, Tier};

/// One row of the tier cascade.
pub struct TierRule {
    pub name: &'static str,
    pub tier: Tier,
    pub matches: fn(&Assessment) -> bool,
}

impl fmt::Debug for TierRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TierRule")
            .field("name", &self.name)
            .field("tier", &self.tier)
            .finish()
    }
}

// Order is significant: the conditions overlap and the first match wins.
pub(super) static TIER_RULES: [TierRule; 5] = [
    TierRule {
        name: "golang-api",
        tier: Tier::AdvancedFullStack,
        matches: golang_api,
    },
    TierRule {
        name: "documented-backend-api",
        tier: Tier::MultiFramework,
        matches: documented_backend_api,
    },
    TierRule {
        name: "nextjs-auth",
        tier: Tier::FullStackNextjs,
        matches: nextjs_auth,
    },
    TierRule {
        name: "crud-without-auth",
        tier: Tier::CrudDeveloper,
        matches: crud_without_auth,
    },
    TierRule {
        name: "web-basics",
        tier: Tier::Beginner,
        matches: web_basics,
    },
];

fn golang_api(a: &Assessment) -> bool {
    a.knows_golang && a.can_build_go_api && a.can_integrate_go_with_frontend
}

fn documented_backend_api(a: &Assessment) -> bool {
    a.knows_backend_framework && a.can_build_auth_api && a.can_document_api && !a.knows_golang
}

fn nextjs_auth(a: &Assessment) -> bool {
    a.can_implement_auth
        && a.can_implement_google_auth
        && (!a.knows_backend_framework || !a.can_build_auth_api)
}

fn crud_without_auth(a: &Assessment) -> bool {
    a.can_build_crud && (!a.can_implement_auth || !a.can_implement_google_auth)
}

fn web_basics(a: &Assessment) -> bool {
    a.knows_html_css_js && a.knows_react_nextjs && !a.can_build_crud
}
