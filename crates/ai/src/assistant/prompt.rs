use stockpilot_inventory::Product;

/// Standing instruction prepended to every question.
pub const INSTRUCTION: &str = "You are a smart inventory-control assistant. \
Answer questions about the stock concisely and helpfully.";

/// One `Name: …, Quantity: …, Price: …` entry per product, joined by `; `.
pub fn inventory_context(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| {
            format!(
                "Name: {}, Quantity: {}, Price: {}",
                p.name(),
                p.quantity(),
                p.price()
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Full user turn: instruction, current stock, then the question.
pub fn build_prompt(products: &[Product], question: &str) -> String {
    let stock = if products.is_empty() {
        "no products registered".to_string()
    } else {
        inventory_context(products)
    };
    format!("{INSTRUCTION} The current stock is: {stock}. Question: {question}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpilot_core::ProductId;

    fn product(id: &str, name: &str, quantity: i64, price: f64) -> Product {
        Product::new(ProductId::new(id).unwrap(), name, quantity, price).unwrap()
    }

    #[test]
    fn context_lists_every_product() {
        let products = vec![product("p1", "Widget", 5, 12.5), product("p2", "Gadget", 40, 3.0)];
        assert_eq!(
            inventory_context(&products),
            "Name: Widget, Quantity: 5, Price: 12.5; Name: Gadget, Quantity: 40, Price: 3"
        );
    }

    #[test]
    fn prompt_ends_with_question() {
        let prompt = build_prompt(&[product("p1", "Widget", 5, 1.0)], "What is low?");
        assert!(prompt.starts_with(INSTRUCTION));
        assert!(prompt.contains("The current stock is: Name: Widget, Quantity: 5, Price: 1."));
        assert!(prompt.ends_with("Question: What is low?"));
    }

    #[test]
    fn prompt_for_empty_inventory() {
        let prompt = build_prompt(&[], "Anything?");
        assert!(prompt.contains("The current stock is: no products registered."));
    }
}
