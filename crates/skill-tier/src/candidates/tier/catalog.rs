use serde::Serialize;

use super::super::domain::Tier;

/// Display metadata for a tier badge or legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierDescriptor {
    pub tier: Tier,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn describe(tier: Tier) -> TierDescriptor {
    let (name, description) = match tier {
        Tier::Beginner => (
            "Beginner",
            "Has done HTML, CSS, and basic JavaScript. Knows the basics of Next.js or React but is not capable of building a CRUD app with a database.",
        ),
        Tier::CrudDeveloper => (
            "CRUD Developer",
            "Can build a CRUD application with a database using server actions or API routes, but cannot add advanced authentication.",
        ),
        Tier::FullStackNextjs => (
            "Full-Stack Next.js Developer",
            "Can build an authenticated (password + Google) CRUD App and deploy it, but lacks knowledge of Express/Hono or other backend frameworks.",
        ),
        Tier::MultiFramework => (
            "Multi-Framework Developer",
            "Can build authenticated CRUD apps with Next.js and authenticated CRUD APIs with Express/Hono (with documentation), but does not know Golang.",
        ),
        Tier::AdvancedFullStack => (
            "Advanced Full-Stack Developer",
            "Proficient in Next.js, Express/Hono, and Golang. Can build simple APIs with Go and integrate them with a frontend.",
        ),
    };

    TierDescriptor {
        tier,
        name,
        description,
    }
}

/// Canned explanation shown to the candidate; depends only on the tier.
pub fn rationale(tier: Tier) -> &'static str {
    match tier {
        Tier::AdvancedFullStack => "You demonstrate advanced proficiency in Next.js, backend frameworks, and Golang, with the ability to build and integrate Go APIs.",
        Tier::MultiFramework => "You can build authenticated CRUD applications and APIs with backend frameworks like Express/Hono/Laravel, but have not yet learned Golang.",
        Tier::FullStackNextjs => "You can build authenticated CRUD applications with Next.js (including password and Google authentication) and deploy them, but lack experience with backend frameworks.",
        Tier::CrudDeveloper => "You can build CRUD applications with databases, but have not yet implemented advanced authentication features.",
        Tier::Beginner => "You have knowledge of HTML, CSS, JavaScript, and React/Next.js basics. Continue building projects to advance to the next tier!",
    }
}
