//! Display helpers shared by presentation components

use gemdesk_domain::ItemData;

/// Table text for a currency amount. The amount is shown exactly as stored.
pub fn price_label(amount: &str) -> String {
    format!("${}", amount)
}

/// Cell text of one inventory row, in column order:
/// Item, SKU, Weight, Karat, Cost, Tag Price.
pub fn row_cells(data: &ItemData) -> [String; 6] {
    [
        data.name.clone(),
        data.sku.clone(),
        data.weight.clone(),
        data.karat.clone(),
        price_label(&data.cost),
        price_label(&data.tag_price),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_dollar_sign_without_reformatting() {
        assert_eq!(price_label("100"), "$100");
        assert_eq!(price_label("99.5"), "$99.5");
        assert_eq!(price_label(""), "$");
    }

    #[test]
    fn ring_row_reads_as_listed() {
        let ring = ItemData {
            name: "Ring A".into(),
            sku: "R-001".into(),
            weight: "5".into(),
            karat: "14K".into(),
            cost: "100".into(),
            tag_price: "250".into(),
            notes: "not shown in the table".into(),
        };

        assert_eq!(
            row_cells(&ring),
            ["Ring A", "R-001", "5", "14K", "$100", "$250"]
        );
    }
}
