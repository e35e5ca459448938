// src/eshop/catalog.rs
//! Static add-on catalogue.
//!
//! The marketplace sells feature add-ons, not inventory, so the catalogue
//! is a fixed list with stable ids the front-end can hardcode.

use super::models::AddonProduct;

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_czk: i64,
    category: &'static str,
}

const CATALOG: [CatalogEntry; 8] = [
    CatalogEntry {
        id: "credit-10",
        name: "Kredit na 10 inzerátů",
        description: "Balíček kreditů na vystavení 10 pracovních inzerátů.",
        price_czk: 14900,
        category: "credits",
    },
    CatalogEntry {
        id: "credit-50",
        name: "Kredit na 50 inzerátů",
        description: "Balíček kreditů na vystavení 50 pracovních inzerátů.",
        price_czk: 59900,
        category: "credits",
    },
    CatalogEntry {
        id: "extend-30",
        name: "Prodloužení inzerátu o 30 dní",
        description: "Prodlouží vystavení jednoho inzerátu na portálech o 30 dní.",
        price_czk: 1900,
        category: "extensions",
    },
    CatalogEntry {
        id: "topping-7",
        name: "Topování inzerátu na 7 dní",
        description: "Zvýrazní inzerát na předních pozicích výpisů po dobu 7 dní.",
        price_czk: 990,
        category: "extensions",
    },
    CatalogEntry {
        id: "premium-profile",
        name: "Premium firemní profil",
        description: "Rozšířený profil společnosti s fotografiemi a videem.",
        price_czk: 4900,
        category: "branding",
    },
    CatalogEntry {
        id: "career-pages",
        name: "Kariérní stránky",
        description: "Vlastní kariérní stránky napojené na inzeráty.",
        price_czk: 9900,
        category: "branding",
    },
    CatalogEntry {
        id: "cv-database-30",
        name: "Přístup do databáze kandidátů",
        description: "Přístup do databáze životopisů na 30 dní.",
        price_czk: 7900,
        category: "sourcing",
    },
    CatalogEntry {
        id: "ai-screening",
        name: "AI předvýběr kandidátů",
        description: "Automatické seřazení příchozích kandidátů podle relevance.",
        price_czk: 2900,
        category: "sourcing",
    },
];

/// All products in catalogue order
pub fn all_products() -> Vec<AddonProduct> {
    CATALOG.iter().map(to_product).collect()
}

/// Products of a single category, catalogue order preserved
pub fn products_in_category(category: &str) -> Vec<AddonProduct> {
    CATALOG
        .iter()
        .filter(|entry| entry.category == category)
        .map(to_product)
        .collect()
}

/// Look up one product by its stable id
pub fn find_product(id: &str) -> Option<AddonProduct> {
    CATALOG.iter().find(|entry| entry.id == id).map(to_product)
}

fn to_product(entry: &CatalogEntry) -> AddonProduct {
    AddonProduct {
        id: entry.id.to_string(),
        name: entry.name.to_string(),
        description: entry.description.to_string(),
        price_czk: entry.price_czk,
        category: entry.category.to_string(),
    }
}
