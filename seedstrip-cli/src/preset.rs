//! Built-in target list used when no `seedstrip.toml` is present.
//!
//! Covers the CRM front end's demo data: one array per page component plus
//! the shared data context that seeds every page.

use seedstrip_types::{DeclarationSignature, StripConfig, TargetFile};

const PAGE_TARGETS: &[(&str, &str, &str)] = &[
    ("src/pages/Customers.tsx", "demoCompanies", "Company"),
    ("src/pages/Products.tsx", "demoProducts", "Product"),
    ("src/pages/AfterSales.tsx", "demoTasks", "Task"),
    ("src/pages/DebtCollection.tsx", "demoDebts", "Debt"),
    ("src/pages/SalesPipeline.tsx", "demoDeals", "Deal"),
    ("src/pages/SalesStrategies.tsx", "demoCampaigns", "Campaign"),
    ("src/pages/Competitors.tsx", "demoCompetitors", "Competitor"),
    ("src/pages/Notifications.tsx", "demoNotifications", "Notification"),
];

const SHARED_CONTEXT: &str = "src/context/SharedDataContext.tsx";

const SHARED_DECLARATIONS: &[(&str, &str)] = &[
    ("demoCustomers", "Customer"),
    ("demoDeals", "Deal"),
    ("demoProducts", "Product"),
    ("demoInvoices", "Invoice"),
    ("demoTickets", "SupportTicket"),
    ("demoLeads", "Lead"),
    ("demoCompetitorDeals", "CompetitorDeal"),
];

pub fn crm_demo_data() -> StripConfig {
    let mut targets: Vec<TargetFile> = PAGE_TARGETS
        .iter()
        .map(|(path, name, ty)| TargetFile::single(*path, name, ty))
        .collect();

    targets.push(TargetFile::new(
        SHARED_CONTEXT,
        SHARED_DECLARATIONS
            .iter()
            .map(|(name, ty)| DeclarationSignature::new(*name, *ty)),
    ));

    StripConfig::new(targets)
}
