//! Input validation for operator-entered data before it reaches the wire.
//! Checkout validation lives in `checkout`; these helpers guard the product
//! maintenance payloads and raw numeric input.

use crate::models::CreateProductPayload;

pub type ValidationResult = Result<(), String>;

/// Product names: 1-200 characters after trimming.
pub fn validate_product_name(name: &str) -> ValidationResult {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Product name must not be empty".into());
    }

    if trimmed.len() > 200 {
        return Err("Product name must be at most 200 characters".into());
    }

    Ok(())
}

/// Monetary amounts: finite and within [min, max].
pub fn validate_amount(amount: f64, min: Option<f64>, max: Option<f64>) -> ValidationResult {
    if amount.is_nan() || amount.is_infinite() {
        return Err("Amount is not a valid number".into());
    }

    let min_val = min.unwrap_or(0.0);
    let max_val = max.unwrap_or(1_000_000_000.0);

    if amount < min_val {
        return Err(format!("Amount must be at least {min_val}"));
    }

    if amount > max_val {
        return Err(format!("Amount must be at most {max_val}"));
    }

    Ok(())
}

/// Stock and quantity counts: non-negative, bounded.
pub fn validate_quantity(qty: i64, min: Option<i64>, max: Option<i64>) -> ValidationResult {
    if qty < 0 {
        return Err("Quantity must not be negative".into());
    }

    let min_val = min.unwrap_or(0);
    let max_val = max.unwrap_or(1_000_000);

    if qty < min_val {
        return Err(format!("Quantity must be at least {min_val}"));
    }

    if qty > max_val {
        return Err(format!("Quantity must be at most {max_val}"));
    }

    Ok(())
}

/// Barcodes are optional; when present they are alphanumeric, max 50 chars.
pub fn validate_barcode(barcode: &str) -> ValidationResult {
    if barcode.is_empty() {
        return Ok(());
    }

    let trimmed = barcode.trim();

    if trimmed.len() > 50 {
        return Err("Barcode must be at most 50 characters".into());
    }

    if !trimmed.chars().all(|c| c.is_alphanumeric()) {
        return Err("Barcode must contain only letters and digits".into());
    }

    Ok(())
}

/// Combined validation for a create-product payload.
pub fn validate_create_product(payload: &CreateProductPayload) -> ValidationResult {
    validate_product_name(&payload.name)?;
    validate_amount(payload.price, Some(0.0), None)?;
    validate_quantity(payload.stock_quantity, None, None)?;

    if let Some(ref barcode) = payload.barcode {
        validate_barcode(barcode)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_product_name("  ").is_err());
        assert!(validate_product_name("Laptop").is_ok());
    }

    #[test]
    fn amounts_must_be_finite_and_non_negative() {
        assert!(validate_amount(f64::NAN, None, None).is_err());
        assert!(validate_amount(-1.0, Some(0.0), None).is_err());
        assert!(validate_amount(300.50, Some(0.0), None).is_ok());
    }

    #[test]
    fn quantities_must_be_non_negative() {
        assert!(validate_quantity(-1, None, None).is_err());
        assert!(validate_quantity(0, None, None).is_ok());
        assert!(validate_quantity(2_000_000, None, None).is_err());
    }

    #[test]
    fn create_payload_is_validated_as_a_whole() {
        let payload = CreateProductPayload {
            name: "New Monitor".to_string(),
            description: None,
            price: 300.50,
            stock_quantity: 20,
            barcode: Some("8901234567890".to_string()),
            category: None,
        };
        assert!(validate_create_product(&payload).is_ok());

        let bad = CreateProductPayload {
            price: -5.0,
            ..payload
        };
        assert!(validate_create_product(&bad).is_err());
    }
}
