//! # Bank Lookup
//!
//! Best-effort table of the banks most often seen on bank slips, keyed by
//! their three-digit COMPE code. This is not an authoritative registry.

/// Name reported for codes that are not in the table.
pub const UNKNOWN: &str = "Unknown";

/// Known banks as `(code, name)`, sorted by code.
pub const BANKS: &[(&str, &str)] = &[
    ("001", "Banco do Brasil"),
    ("004", "Banco do Nordeste"),
    ("007", "BNDES"),
    ("033", "Santander"),
    ("041", "Banrisul"),
    ("070", "BRB - Banco de Brasília"),
    ("077", "Banco Inter"),
    ("104", "Caixa Econômica Federal"),
    ("208", "BTG Pactual"),
    ("212", "Banco Original"),
    ("237", "Bradesco"),
    ("260", "Nu Pagamentos"),
    ("318", "Banco BMG"),
    ("336", "Banco C6"),
    ("341", "Itaú"),
    ("389", "Banco Mercantil do Brasil"),
    ("422", "Banco Safra"),
    ("633", "Banco Rendimento"),
    ("652", "Itaú Unibanco Holding"),
    ("745", "Citibank"),
    ("748", "Sicredi"),
    ("756", "Sicoob"),
];

/// Look up a bank name by code.
///
/// ## Example
///
/// ```
/// use boleto::bank;
///
/// assert_eq!(bank::name_for("341"), "Itaú");
/// assert_eq!(bank::name_for("999"), bank::UNKNOWN);
/// ```
pub fn name_for(code: &str) -> &'static str {
    BANKS
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .map(|idx| BANKS[idx].1)
        .unwrap_or(UNKNOWN)
}
