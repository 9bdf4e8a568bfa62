//! The bundled sample dataset.
//!
//! All dashboard views are derived from these compile-time constants. Nothing
//! is created, mutated or deleted at runtime.

/// One month's financial snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRecord {
    /// Three-letter month label, e.g. "Jan".
    pub month: &'static str,
    /// Revenue for the month in dollars.
    pub revenue: f64,
    /// Expenses for the month in dollars.
    pub expenses: f64,
    /// Profit for the month in dollars.
    pub profit: f64,
    /// Month-over-month growth as a percentage, e.g. 8.5 for 8.5%.
    pub growth: f64,
    /// Number of active customers.
    pub customers: u32,
}

/// A slice of the yearly expenses attributed to one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseCategory {
    /// Category label, e.g. "Marketing".
    pub category: &'static str,
    /// Total amount spent on the category in dollars.
    pub amount: f64,
    /// The color used for this category's pie segment.
    pub color: &'static str,
}

/// Twelve months of sample financial metrics, in calendar order.
pub const MONTHLY_RECORDS: [MonthlyRecord; 12] = [
    MonthlyRecord {
        month: "Jan",
        revenue: 45000.0,
        expenses: 32000.0,
        profit: 13000.0,
        growth: 8.5,
        customers: 1250,
    },
    MonthlyRecord {
        month: "Feb",
        revenue: 52000.0,
        expenses: 35000.0,
        profit: 17000.0,
        growth: 15.6,
        customers: 1380,
    },
    MonthlyRecord {
        month: "Mar",
        revenue: 48000.0,
        expenses: 33000.0,
        profit: 15000.0,
        growth: 6.7,
        customers: 1420,
    },
    MonthlyRecord {
        month: "Apr",
        revenue: 61000.0,
        expenses: 38000.0,
        profit: 23000.0,
        growth: 27.1,
        customers: 1650,
    },
    MonthlyRecord {
        month: "May",
        revenue: 55000.0,
        expenses: 36000.0,
        profit: 19000.0,
        growth: 22.2,
        customers: 1580,
    },
    MonthlyRecord {
        month: "Jun",
        revenue: 67000.0,
        expenses: 41000.0,
        profit: 26000.0,
        growth: 21.8,
        customers: 1750,
    },
    MonthlyRecord {
        month: "Jul",
        revenue: 72000.0,
        expenses: 43000.0,
        profit: 29000.0,
        growth: 34.5,
        customers: 1890,
    },
    MonthlyRecord {
        month: "Aug",
        revenue: 69000.0,
        expenses: 42000.0,
        profit: 27000.0,
        growth: 28.1,
        customers: 1820,
    },
    MonthlyRecord {
        month: "Sep",
        revenue: 78000.0,
        expenses: 46000.0,
        profit: 32000.0,
        growth: 30.0,
        customers: 2010,
    },
    MonthlyRecord {
        month: "Oct",
        revenue: 74000.0,
        expenses: 44000.0,
        profit: 30000.0,
        growth: 25.4,
        customers: 1950,
    },
    MonthlyRecord {
        month: "Nov",
        revenue: 82000.0,
        expenses: 48000.0,
        profit: 34000.0,
        growth: 35.2,
        customers: 2150,
    },
    MonthlyRecord {
        month: "Dec",
        revenue: 89000.0,
        expenses: 52000.0,
        profit: 37000.0,
        growth: 42.3,
        customers: 2280,
    },
];

/// Yearly expenses grouped into five categories.
pub const EXPENSE_BREAKDOWN: [ExpenseCategory; 5] = [
    ExpenseCategory {
        category: "Marketing",
        amount: 156000.0,
        color: "#5470c6",
    },
    ExpenseCategory {
        category: "Operations",
        amount: 234000.0,
        color: "#91cc75",
    },
    ExpenseCategory {
        category: "Technology",
        amount: 89000.0,
        color: "#fac858",
    },
    ExpenseCategory {
        category: "Personnel",
        amount: 312000.0,
        color: "#ee6666",
    },
    ExpenseCategory {
        category: "Other",
        amount: 67000.0,
        color: "#73c0de",
    },
];
