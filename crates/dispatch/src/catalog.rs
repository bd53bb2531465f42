//! Role-scoped quick actions
//!
//! The catalog is an immutable table built once per process and shared by
//! reference. Each role owns exactly four actions, in display order.

use adamftd_core::{NavigationTarget, Role};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

static GLOBAL_CATALOG: LazyLock<ActionCatalog> = LazyLock::new(ActionCatalog::standard);

/// Accent colour slot, assigned by position within a role's list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Teal,
    Green,
    Amber,
    Purple,
}

impl Accent {
    const BY_POSITION: [Accent; 4] = [Accent::Teal, Accent::Green, Accent::Amber, Accent::Purple];
}

/// Icon hint for an action card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionIcon {
    Search,
    Shield,
    Trending,
    Users,
    Ship,
    Document,
}

/// Presentation hint; opaque to dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionStyle {
    pub accent: Accent,
    pub icon: ActionIcon,
}

/// A quick-action shortcut pairing a label with a fixed destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub target: NavigationTarget,
    pub style: ActionStyle,
}

struct ActionSpec {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    /// Literal destination, e.g. `/search?mode=find-buyers`
    target: &'static str,
    icon: ActionIcon,
}

const EXPORTER_ACTIONS: [ActionSpec; 4] = [
    ActionSpec {
        id: "find-importers",
        label: "Discover Buyers",
        description: "Identify qualified importers by HS code and market",
        target: "/search?mode=find-buyers",
        icon: ActionIcon::Search,
    },
    ActionSpec {
        id: "check-risk",
        label: "Risk Assessment",
        description: "Comprehensive sanctions and compliance screening",
        target: "/compliance/check",
        icon: ActionIcon::Shield,
    },
    ActionSpec {
        id: "competitor-intel",
        label: "Competitive Intelligence",
        description: "Analyze competitor shipments and market positioning",
        target: "/search?mode=competitor",
        icon: ActionIcon::Trending,
    },
    ActionSpec {
        id: "market-entry",
        label: "Market Analysis",
        description: "Data-driven export market evaluation reports",
        target: "/reports/market-entry",
        icon: ActionIcon::Document,
    },
];

const IMPORTER_ACTIONS: [ActionSpec; 4] = [
    ActionSpec {
        id: "find-suppliers",
        label: "Source Suppliers",
        description: "Find verified exporters with proven track records",
        target: "/search?mode=find-suppliers",
        icon: ActionIcon::Search,
    },
    ActionSpec {
        id: "check-risk",
        label: "Supplier Verification",
        description: "Due diligence and compliance history analysis",
        target: "/compliance/check",
        icon: ActionIcon::Shield,
    },
    ActionSpec {
        id: "price-benchmark",
        label: "Price Intelligence",
        description: "Market-wide unit price benchmarking analytics",
        target: "/analytics/pricing",
        icon: ActionIcon::Trending,
    },
    ActionSpec {
        id: "duty-lookup",
        label: "Tariff Calculator",
        description: "Real-time duty rates and trade measures lookup",
        target: "/tariffs",
        icon: ActionIcon::Document,
    },
];

const LOGISTICS_ACTIONS: [ActionSpec; 4] = [
    ActionSpec {
        id: "find-shippers",
        label: "Lead Generation",
        description: "Identify high-volume shippers on target trade lanes",
        target: "/search?mode=find-shippers",
        icon: ActionIcon::Ship,
    },
    ActionSpec {
        id: "route-analysis",
        label: "Lane Analytics",
        description: "Traffic volumes, carriers, and seasonality insights",
        target: "/analytics/routes",
        icon: ActionIcon::Trending,
    },
    ActionSpec {
        id: "port-congestion",
        label: "Port Intelligence",
        description: "Real-time terminal congestion and delay tracking",
        target: "/ports/congestion",
        icon: ActionIcon::Ship,
    },
    ActionSpec {
        id: "rate-benchmark",
        label: "Rate Benchmarking",
        description: "Freight rate analysis by trade lane and mode",
        target: "/analytics/rates",
        icon: ActionIcon::Document,
    },
];

const CHAMBER_ACTIONS: [ActionSpec; 4] = [
    ActionSpec {
        id: "member-export-readiness",
        label: "Export Readiness",
        description: "Score and rank members by trade capability",
        target: "/members/readiness",
        icon: ActionIcon::Users,
    },
    ActionSpec {
        id: "trade-mission",
        label: "Mission Planning",
        description: "Data-driven trade mission candidate selection",
        target: "/missions/create",
        icon: ActionIcon::Ship,
    },
    ActionSpec {
        id: "export-report",
        label: "Report Builder",
        description: "Generate sector and market intelligence reports",
        target: "/reports/builder",
        icon: ActionIcon::Document,
    },
    ActionSpec {
        id: "member-search",
        label: "Member Analytics",
        description: "Track member trade activity and performance",
        target: "/members/search",
        icon: ActionIcon::Search,
    },
];

const GOVERNMENT_ACTIONS: [ActionSpec; 4] = [
    ActionSpec {
        id: "anomaly-alerts",
        label: "Anomaly Detection",
        description: "AI-flagged suspicious transaction patterns",
        target: "/anomalies",
        icon: ActionIcon::Shield,
    },
    ActionSpec {
        id: "sector-monitor",
        label: "Sector Monitoring",
        description: "Strategic sector trade flow analysis",
        target: "/sectors",
        icon: ActionIcon::Trending,
    },
    ActionSpec {
        id: "policy-simulator",
        label: "Policy Modeling",
        description: "Simulate tariff and regulatory impact scenarios",
        target: "/policy/simulator",
        icon: ActionIcon::Document,
    },
    ActionSpec {
        id: "company-investigation",
        label: "Entity Investigation",
        description: "Deep entity profiles and network mapping",
        target: "/investigations",
        icon: ActionIcon::Search,
    },
];

fn specs_for(role: Role) -> &'static [ActionSpec; 4] {
    match role {
        Role::Exporter => &EXPORTER_ACTIONS,
        Role::Importer => &IMPORTER_ACTIONS,
        Role::Logistics => &LOGISTICS_ACTIONS,
        Role::Chamber => &CHAMBER_ACTIONS,
        Role::Government => &GOVERNMENT_ACTIONS,
    }
}

fn build_descriptors(specs: &'static [ActionSpec; 4]) -> Vec<ActionDescriptor> {
    specs
        .iter()
        .zip(Accent::BY_POSITION)
        .map(|(spec, accent)| {
            let target = NavigationTarget::parse(spec.target).unwrap_or_else(|e| {
                warn!("Action {} has a malformed target: {e}", spec.id);
                NavigationTarget::new(spec.target)
            });
            ActionDescriptor {
                id: spec.id,
                label: spec.label,
                description: spec.description,
                target,
                style: ActionStyle {
                    accent,
                    icon: spec.icon,
                },
            }
        })
        .collect()
}

/// Immutable lookup from role to its ordered quick actions
///
/// Unrecognized roles resolve to the [`Role::DEFAULT`] (exporter) list.
#[derive(Debug, Clone)]
pub struct ActionCatalog {
    by_role: HashMap<Role, Vec<ActionDescriptor>>,
}

impl ActionCatalog {
    /// Process-wide catalog, built on first use
    pub fn global() -> &'static ActionCatalog {
        &GLOBAL_CATALOG
    }

    /// Build the standard table
    pub fn standard() -> Self {
        let by_role = Role::ALL
            .iter()
            .map(|role| (*role, build_descriptors(specs_for(*role))))
            .collect::<HashMap<_, _>>();
        debug!("Built action catalog for {} roles", by_role.len());
        Self { by_role }
    }

    /// Actions for a role given as free text
    pub fn actions_for(&self, role: &str) -> &[ActionDescriptor] {
        self.actions_for_role(Role::parse_lenient(role))
    }

    /// Actions for a known role
    pub fn actions_for_role(&self, role: Role) -> &[ActionDescriptor] {
        self.by_role
            .get(&role)
            .or_else(|| self.by_role.get(&Role::DEFAULT))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find one action by id within a role's list
    pub fn action(&self, role: Role, id: &str) -> Option<&ActionDescriptor> {
        self.actions_for_role(role)
            .iter()
            .find(|action| action.id == id)
    }
}

impl Default for ActionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(actions: &[ActionDescriptor]) -> Vec<&'static str> {
        actions.iter().map(|a| a.id).collect()
    }

    fn urls(actions: &[ActionDescriptor]) -> Vec<String> {
        actions.iter().map(|a| a.target.to_url()).collect()
    }

    #[test]
    fn test_exporter_actions_in_order() {
        let catalog = ActionCatalog::standard();
        let actions = catalog.actions_for("exporter");
        assert_eq!(
            ids(actions),
            vec![
                "find-importers",
                "check-risk",
                "competitor-intel",
                "market-entry"
            ]
        );
        assert_eq!(
            urls(actions),
            vec![
                "/search?mode=find-buyers",
                "/compliance/check",
                "/search?mode=competitor",
                "/reports/market-entry"
            ]
        );
    }

    #[test]
    fn test_importer_actions_in_order() {
        let catalog = ActionCatalog::standard();
        let actions = catalog.actions_for_role(Role::Importer);
        assert_eq!(
            ids(actions),
            vec![
                "find-suppliers",
                "check-risk",
                "price-benchmark",
                "duty-lookup"
            ]
        );
        assert_eq!(
            urls(actions),
            vec![
                "/search?mode=find-suppliers",
                "/compliance/check",
                "/analytics/pricing",
                "/tariffs"
            ]
        );
    }

    #[test]
    fn test_logistics_chamber_government_actions() {
        let catalog = ActionCatalog::standard();
        assert_eq!(
            urls(catalog.actions_for_role(Role::Logistics)),
            vec![
                "/search?mode=find-shippers",
                "/analytics/routes",
                "/ports/congestion",
                "/analytics/rates"
            ]
        );
        assert_eq!(
            urls(catalog.actions_for_role(Role::Chamber)),
            vec![
                "/members/readiness",
                "/missions/create",
                "/reports/builder",
                "/members/search"
            ]
        );
        assert_eq!(
            urls(catalog.actions_for_role(Role::Government)),
            vec![
                "/anomalies",
                "/sectors",
                "/policy/simulator",
                "/investigations"
            ]
        );
    }

    #[test]
    fn test_unknown_role_falls_back_to_exporter() {
        let catalog = ActionCatalog::standard();
        assert_eq!(catalog.actions_for("unknown"), catalog.actions_for("exporter"));
        assert_eq!(catalog.actions_for(""), catalog.actions_for("exporter"));
    }

    #[test]
    fn test_every_role_has_four_unique_actions() {
        let catalog = ActionCatalog::standard();
        for role in Role::ALL {
            let actions = catalog.actions_for_role(role);
            assert_eq!(actions.len(), 4, "role {role}");
            let mut unique = ids(actions);
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), 4, "duplicate id for role {role}");
        }
    }

    #[test]
    fn test_repeated_lookup_is_stable() {
        let catalog = ActionCatalog::global();
        let first = catalog.actions_for("chamber").to_vec();
        for _ in 0..3 {
            assert_eq!(catalog.actions_for("chamber"), first.as_slice());
        }
    }

    #[test]
    fn test_accents_follow_position() {
        let catalog = ActionCatalog::standard();
        let accents: Vec<Accent> = catalog
            .actions_for_role(Role::Government)
            .iter()
            .map(|a| a.style.accent)
            .collect();
        assert_eq!(
            accents,
            vec![Accent::Teal, Accent::Green, Accent::Amber, Accent::Purple]
        );
    }

    #[test]
    fn test_targets_render_their_literals() {
        let catalog = ActionCatalog::standard();
        for role in Role::ALL {
            let literals = specs_for(role).iter().map(|spec| spec.target.to_string());
            assert_eq!(
                urls(catalog.actions_for_role(role)),
                literals.collect::<Vec<_>>(),
                "role {role}"
            );
        }
        let action = catalog
            .action(Role::Logistics, "find-shippers")
            .expect("lead generation exists");
        assert_eq!(action.target.path(), "/search");
        assert_eq!(action.target.param("mode"), Some("find-shippers"));
    }

    #[test]
    fn test_action_lookup_by_id() {
        let catalog = ActionCatalog::standard();
        let action = catalog
            .action(Role::Importer, "duty-lookup")
            .expect("duty lookup exists");
        assert_eq!(action.label, "Tariff Calculator");
        assert!(catalog.action(Role::Importer, "market-entry").is_none());
    }
}
