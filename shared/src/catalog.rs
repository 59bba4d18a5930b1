//! Built-in ERP menu catalog
//!
//! Central definitions for the modules and menu items the permission
//! service seeds. The server remains the source of truth at runtime (the
//! tenant's plan filters what actually comes back from
//! `/permissions/available-menus`); this table backs demos, fixtures, and
//! icon-key validation.

use chrono::Utc;
use uuid::Uuid;

use crate::client::AvailableMenusResponse;
use crate::models::{MenuItem, Module};

/// Static menu item definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItemDef {
    pub code: &'static str,
    pub name: &'static str,
    pub route: &'static str,
    pub permission_key: &'static str,
    pub icon: &'static str,
}

/// Static module definition with its menu items in sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDef {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub sort_order: i32,
    pub items: &'static [MenuItemDef],
}

/// All modules, ordered by `sort_order`
pub const MODULES: &[ModuleDef] = &[
    ModuleDef {
        code: "master_data",
        name: "Master Data",
        description: "Catalogue foundational business references",
        icon: "database",
        sort_order: 1,
        items: &[
            MenuItemDef {
                code: "master_products",
                name: "Products",
                route: "/master-data/products",
                permission_key: "products.view",
                icon: "package",
            },
            MenuItemDef {
                code: "master_product_categories",
                name: "Product Categories",
                route: "/master-data/product-categories",
                permission_key: "product_categories.view",
                icon: "tags",
            },
            MenuItemDef {
                code: "master_contacts",
                name: "Contacts",
                route: "/master-data/contacts",
                permission_key: "contacts.view",
                icon: "users",
            },
            MenuItemDef {
                code: "master_chart_of_accounts",
                name: "Chart of Accounts",
                route: "/master-data/chart-of-accounts",
                permission_key: "chart_of_accounts.view",
                icon: "book-open",
            },
            MenuItemDef {
                code: "master_locations",
                name: "Locations",
                route: "/master-data/locations",
                permission_key: "locations.view",
                icon: "map-pin",
            },
            MenuItemDef {
                code: "master_currencies",
                name: "Currencies",
                route: "/master-data/currencies",
                permission_key: "currencies.view",
                icon: "coins",
            },
            MenuItemDef {
                code: "master_units",
                name: "Units",
                route: "/master-data/units",
                permission_key: "units.view",
                icon: "ruler",
            },
            MenuItemDef {
                code: "master_payment_terms",
                name: "Payment Terms",
                route: "/master-data/payment-terms",
                permission_key: "payment_terms.view",
                icon: "calendar-clock",
            },
            MenuItemDef {
                code: "master_taxes",
                name: "Taxes",
                route: "/master-data/taxes",
                permission_key: "taxes.view",
                icon: "percent",
            },
        ],
    },
    ModuleDef {
        code: "finance",
        name: "Finance",
        description: "Manage cash, journals, and statutory reporting",
        icon: "wallet",
        sort_order: 2,
        items: &[
            MenuItemDef {
                code: "finance_cash_bank_in",
                name: "Cash/Bank In",
                route: "/finance/cash-bank-in",
                permission_key: "finance.cash_bank_in.view",
                icon: "log-in",
            },
            MenuItemDef {
                code: "finance_cash_bank_out",
                name: "Cash/Bank Out",
                route: "/finance/cash-bank-out",
                permission_key: "finance.cash_bank_out.view",
                icon: "log-out",
            },
            MenuItemDef {
                code: "finance_journal_general",
                name: "General Journal",
                route: "/finance/journal-entries",
                permission_key: "finance.journal.view",
                icon: "book",
            },
            MenuItemDef {
                code: "finance_ap_payment",
                name: "AP Payments",
                route: "/finance/ap-payments",
                permission_key: "finance.ap_payments.view",
                icon: "wallet-cards",
            },
            MenuItemDef {
                code: "finance_ar_payment",
                name: "AR Payments",
                route: "/finance/ar-payments",
                permission_key: "finance.ar_payments.view",
                icon: "wallet",
            },
            MenuItemDef {
                code: "finance_report_general_ledger",
                name: "General Ledger",
                route: "/finance/reports/general-ledger",
                permission_key: "finance.reports.general_ledger",
                icon: "book-open",
            },
            MenuItemDef {
                code: "finance_report_ap_aging",
                name: "AP Aging",
                route: "/finance/reports/ap-aging",
                permission_key: "finance.reports.ap_aging",
                icon: "timer",
            },
            MenuItemDef {
                code: "finance_report_ar_aging",
                name: "AR Aging",
                route: "/finance/reports/ar-aging",
                permission_key: "finance.reports.ar_aging",
                icon: "timer-reset",
            },
            MenuItemDef {
                code: "finance_report_balance_sheet",
                name: "Balance Sheet",
                route: "/finance/reports/balance-sheet",
                permission_key: "finance.reports.balance_sheet",
                icon: "scale",
            },
            MenuItemDef {
                code: "finance_report_cash_flow",
                name: "Cash Flow",
                route: "/finance/reports/cash-flow",
                permission_key: "finance.reports.cash_flow",
                icon: "waves",
            },
            MenuItemDef {
                code: "finance_report_ar_recap",
                name: "AR Recap",
                route: "/finance/reports/ar-recap",
                permission_key: "finance.reports.ar_recap",
                icon: "list",
            },
            MenuItemDef {
                code: "finance_report_ap_recap",
                name: "AP Recap",
                route: "/finance/reports/ap-recap",
                permission_key: "finance.reports.ap_recap",
                icon: "list-checks",
            },
        ],
    },
    ModuleDef {
        code: "inventory",
        name: "Inventory",
        description: "Monitor and control stock movements",
        icon: "boxes",
        sort_order: 3,
        items: &[
            MenuItemDef {
                code: "inventory_product_mutation",
                name: "Product Mutation",
                route: "/inventory/product-mutations",
                permission_key: "inventory.product_mutations.view",
                icon: "shuffle",
            },
            MenuItemDef {
                code: "inventory_stock_opname",
                name: "Stock Opname",
                route: "/inventory/stock-opname",
                permission_key: "inventory.stock_opname.view",
                icon: "clipboard-list",
            },
            MenuItemDef {
                code: "inventory_stock_adjustment",
                name: "Stock Adjustment",
                route: "/inventory/stock-adjustments",
                permission_key: "inventory.stock_adjustments.view",
                icon: "sliders",
            },
            MenuItemDef {
                code: "inventory_report_stock_card",
                name: "Stock Card",
                route: "/inventory/reports/stock-card",
                permission_key: "inventory.reports.stock_card",
                icon: "id-card",
            },
            MenuItemDef {
                code: "inventory_report_inventory",
                name: "Inventory Report",
                route: "/inventory/reports/inventory",
                permission_key: "inventory.reports.inventory",
                icon: "bar-chart-2",
            },
        ],
    },
    ModuleDef {
        code: "purchasing",
        name: "Purchasing",
        description: "Procurement lifecycle from request to invoice",
        icon: "shopping-cart",
        sort_order: 4,
        items: &[
            MenuItemDef {
                code: "purchasing_purchase_request",
                name: "Purchase Request",
                route: "/purchasing/purchase-requests",
                permission_key: "purchasing.purchase_requests.view",
                icon: "file-plus",
            },
            MenuItemDef {
                code: "purchasing_request_for_quotation",
                name: "Request for Quotation",
                route: "/purchasing/request-for-quotation",
                permission_key: "purchasing.rfq.view",
                icon: "file-question",
            },
            MenuItemDef {
                code: "purchasing_purchase_order",
                name: "Purchase Order",
                route: "/purchasing/purchase-orders",
                permission_key: "purchasing.purchase_orders.view",
                icon: "file-text",
            },
            MenuItemDef {
                code: "purchasing_goods_receipt",
                name: "Goods Receipt",
                route: "/purchasing/goods-receipts",
                permission_key: "purchasing.goods_receipts.view",
                icon: "package-plus",
            },
            MenuItemDef {
                code: "purchasing_receive_invoice",
                name: "Receive Invoice",
                route: "/purchasing/received-invoices",
                permission_key: "purchasing.receive_invoices.view",
                icon: "file-check",
            },
            MenuItemDef {
                code: "purchasing_purchase_return",
                name: "Purchase Return",
                route: "/purchasing/purchase-returns",
                permission_key: "purchasing.purchase_returns.view",
                icon: "rotate-ccw",
            },
            MenuItemDef {
                code: "purchasing_tukar_faktur",
                name: "Tukar Faktur",
                route: "/purchasing/tukar-faktur",
                permission_key: "purchasing.tukar_faktur.view",
                icon: "repeat",
            },
            MenuItemDef {
                code: "purchasing_report_purchase",
                name: "Purchase Report",
                route: "/purchasing/reports/purchase",
                permission_key: "purchasing.reports.purchase",
                icon: "bar-chart",
            },
        ],
    },
    ModuleDef {
        code: "sales",
        name: "Sales",
        description: "Quote-to-cash activities and analytics",
        icon: "trending-up",
        sort_order: 5,
        items: &[
            MenuItemDef {
                code: "sales_sales_quotation",
                name: "Sales Quotation",
                route: "/sales/quotations",
                permission_key: "sales.quotations.view",
                icon: "file-input",
            },
            MenuItemDef {
                code: "sales_sales_order",
                name: "Sales Order",
                route: "/sales/orders",
                permission_key: "sales.orders.view",
                icon: "shopping-bag",
            },
            MenuItemDef {
                code: "sales_sales_invoice",
                name: "Sales Invoice",
                route: "/sales/invoices",
                permission_key: "sales.invoices.view",
                icon: "receipt",
            },
            MenuItemDef {
                code: "sales_sales_return",
                name: "Sales Return",
                route: "/sales/returns",
                permission_key: "sales.returns.view",
                icon: "rotate-cw",
            },
            MenuItemDef {
                code: "sales_pos",
                name: "Point of Sale",
                route: "/sales/pos",
                permission_key: "sales.pos.view",
                icon: "touchpad",
            },
            MenuItemDef {
                code: "sales_report_sales",
                name: "Sales Report",
                route: "/sales/reports/sales",
                permission_key: "sales.reports.sales",
                icon: "bar-chart-3",
            },
            MenuItemDef {
                code: "sales_report_salesperson",
                name: "Salesperson Report",
                route: "/sales/reports/salesperson",
                permission_key: "sales.reports.salesperson",
                icon: "users-2",
            },
            MenuItemDef {
                code: "sales_report_customer",
                name: "Customer Report",
                route: "/sales/reports/customers",
                permission_key: "sales.reports.customer",
                icon: "user-circle",
            },
            MenuItemDef {
                code: "sales_report_item",
                name: "Item Sales Report",
                route: "/sales/reports/items",
                permission_key: "sales.reports.item",
                icon: "list",
            },
        ],
    },
    ModuleDef {
        code: "manufacturing",
        name: "Manufacturing",
        description: "Production planning and execution",
        icon: "factory",
        sort_order: 6,
        items: &[
            MenuItemDef {
                code: "manufacturing_bill_of_material",
                name: "Bill of Material",
                route: "/manufacturing/bill-of-material",
                permission_key: "manufacturing.bom.view",
                icon: "layers",
            },
            MenuItemDef {
                code: "manufacturing_production_order",
                name: "Production Order",
                route: "/manufacturing/production-orders",
                permission_key: "manufacturing.production_orders.view",
                icon: "factory",
            },
            MenuItemDef {
                code: "manufacturing_work_center",
                name: "Work Center",
                route: "/manufacturing/work-centers",
                permission_key: "manufacturing.work_centers.view",
                icon: "server-cog",
            },
            MenuItemDef {
                code: "manufacturing_report_production",
                name: "Production Report",
                route: "/manufacturing/reports/production",
                permission_key: "manufacturing.reports.production",
                icon: "chart-line",
            },
            MenuItemDef {
                code: "manufacturing_report_work_center",
                name: "Work Center Report",
                route: "/manufacturing/reports/work-center",
                permission_key: "manufacturing.reports.work_center",
                icon: "wrench",
            },
        ],
    },
    ModuleDef {
        code: "administration",
        name: "Administration",
        description: "Tenant administration and access control",
        icon: "shield",
        sort_order: 7,
        items: &[
            MenuItemDef {
                code: "admin_users",
                name: "User Management",
                route: "/users",
                permission_key: "users.view",
                icon: "users",
            },
            MenuItemDef {
                code: "admin_roles",
                name: "Role Management",
                route: "/roles",
                permission_key: "roles.view",
                icon: "shield",
            },
        ],
    },
];

/// All distinct permission keys in the catalog, sorted
pub fn all_permission_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = MODULES
        .iter()
        .flat_map(|module| module.items.iter().map(|item| item.permission_key))
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Find a menu item definition and its module by item code
pub fn find_item(code: &str) -> Option<(&'static ModuleDef, &'static MenuItemDef)> {
    MODULES.iter().find_map(|module| {
        module
            .items
            .iter()
            .find(|item| item.code == code)
            .map(|item| (module, item))
    })
}

/// Materialize the full catalog as a runtime menu universe
///
/// Generates fresh UUIDs on every call; intended for demos and test
/// fixtures, not as a substitute for the server response.
pub fn instantiate(plan_code: &str, plan_name: &str) -> AvailableMenusResponse {
    let now = Utc::now();
    let mut modules = Vec::with_capacity(MODULES.len());
    let mut menu_items = Vec::new();

    for module_def in MODULES {
        let module = Module {
            id: Uuid::new_v4(),
            code: module_def.code.to_string(),
            name: module_def.name.to_string(),
            description: Some(module_def.description.to_string()),
            icon: Some(module_def.icon.to_string()),
            sort_order: module_def.sort_order,
            is_active: true,
            created_at: now,
        };

        for (index, item_def) in module_def.items.iter().enumerate() {
            menu_items.push(MenuItem {
                id: Uuid::new_v4(),
                module_id: module.id,
                code: item_def.code.to_string(),
                name: item_def.name.to_string(),
                description: None,
                route: Some(item_def.route.to_string()),
                permission_key: item_def.permission_key.to_string(),
                icon: Some(item_def.icon.to_string()),
                sort_order: (index + 1) as i32,
                is_active: true,
                created_at: now,
            });
        }

        modules.push(module);
    }

    AvailableMenusResponse {
        current_plan: plan_code.to_string(),
        plan_name: plan_name.to_string(),
        modules,
        menu_items,
    }
}
