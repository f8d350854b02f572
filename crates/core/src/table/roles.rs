//! Header-based column role inference.

/// Header naming the description column.
pub const DESCRIPTION_HEADER: &str = "Description";
/// Header naming a secondary figure that never holds the amount.
pub const LIQUIDITY_HEADER: &str = "Liquidity";
/// Header naming the accessible flag column.
pub const ACCESSIBLE_HEADER: &str = "Accessible";

/// Column index used for the amount when no header qualifies.
const FALLBACK_AMOUNT_COLUMN: usize = 1;

/// Which column of a section holds which field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRoles {
    /// Description column.
    pub description: usize,
    /// Amount column.
    pub amount: usize,
    /// Accessible flag column, when the header has one.
    pub accessible: Option<usize>,
}

impl ColumnRoles {
    /// Infers roles from header cells.
    ///
    /// Historical exports were produced under exactly these rules, so they
    /// must not be made smarter: the amount is the first column that is not
    /// `Description`, `Liquidity`, or `Accessible`, falling back to column 1.
    /// Header names are matched literally.
    #[must_use]
    pub fn infer(header: &[String]) -> Self {
        let position = |name: &str| header.iter().position(|h| h == name);

        let description = position(DESCRIPTION_HEADER).unwrap_or(0);
        let accessible = position(ACCESSIBLE_HEADER);
        let amount = header
            .iter()
            .position(|h| {
                h != DESCRIPTION_HEADER && h != LIQUIDITY_HEADER && h != ACCESSIBLE_HEADER
            })
            .unwrap_or(FALLBACK_AMOUNT_COLUMN);

        Self {
            description,
            amount,
            accessible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn test_standard_asset_header() {
        let roles = ColumnRoles::infer(&header(&["Description", "Amount", "Liquidity", "Accessible"]));
        assert_eq!(
            roles,
            ColumnRoles {
                description: 0,
                amount: 1,
                accessible: Some(3),
            }
        );
    }

    #[test]
    fn test_liquidity_before_amount_is_skipped() {
        let roles = ColumnRoles::infer(&header(&["Description", "Liquidity", "Value"]));
        assert_eq!(roles.amount, 2);
        assert_eq!(roles.accessible, None);
    }

    #[test]
    fn test_description_not_first() {
        let roles = ColumnRoles::infer(&header(&["Accessible", "Description", "Amount"]));
        assert_eq!(roles.description, 1);
        assert_eq!(roles.amount, 2);
        assert_eq!(roles.accessible, Some(0));
    }

    #[test]
    fn test_missing_description_defaults_to_first_column() {
        // Column 0 is also the first non-special column, so it doubles as
        // the amount column.
        let roles = ColumnRoles::infer(&header(&["Item", "Amount"]));
        assert_eq!(roles.description, 0);
        assert_eq!(roles.amount, 0);
    }

    #[test]
    fn test_only_special_headers_falls_back() {
        let roles = ColumnRoles::infer(&header(&["Description", "Liquidity", "Accessible"]));
        assert_eq!(roles.amount, 1);
    }

    #[test]
    fn test_empty_header_falls_back() {
        let roles = ColumnRoles::infer(&[]);
        assert_eq!(
            roles,
            ColumnRoles {
                description: 0,
                amount: 1,
                accessible: None,
            }
        );
    }

    #[test]
    fn test_blank_header_cell_is_amount() {
        // Padding cells are empty strings and count as non-special.
        let roles = ColumnRoles::infer(&header(&["Description", "", "Amount"]));
        assert_eq!(roles.amount, 1);
    }

    #[test]
    fn test_header_match_is_literal() {
        let roles = ColumnRoles::infer(&header(&["description", "Amount"]));
        assert_eq!(roles.description, 0);
        assert_eq!(roles.amount, 0);
    }
}
