use serde::Serialize;

/// Required columns, in the order error messages enumerate them.
pub const REQUIRED_COLUMNS: &[&str] = &["Month", "Type", "Category", "Amount"];

pub const COL_MONTH: &str = "Month";
pub const COL_TYPE: &str = "Type";
pub const COL_CATEGORY: &str = "Category";
pub const COL_AMOUNT: &str = "Amount";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_BUDGET: &str = "Budget";

/// Transaction type tag. Four values carry KPI meaning; anything else is
/// preserved verbatim but excluded from the KPI formulas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TxnType {
    Income,
    Fixed,
    Variable,
    Investment,
    Other(String),
}

impl TxnType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Income" => Self::Income,
            "Fixed" => Self::Fixed,
            "Variable" => Self::Variable,
            "Investment" => Self::Investment,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Income => "Income",
            Self::Fixed => "Fixed",
            Self::Variable => "Variable",
            Self::Investment => "Investment",
            Self::Other(s) => s,
        }
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Fixed | Self::Variable)
    }
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A cleaned transaction record. Sign convention: income positive,
/// expenses and investments negative.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub month: String,
    pub kind: TxnType,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub budget: Option<f64>,
}

/// Uniform pre-validation shape shared by the CSV and spreadsheet parsers.
/// All cells are strings; the cleaner owns numeric coercion.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Which source strategy actually supplied the active dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Uploaded,
    Remote,
    Demo,
}

impl Provenance {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Remote => "remote",
            Self::Demo => "demo",
        }
    }
}

/// Aggregate financial metrics over a cleaned table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiSet {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_investments: f64,
    pub net_income: f64,
    pub savings_rate: f64,
}
