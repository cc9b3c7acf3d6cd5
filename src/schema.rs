diesel::table! {
    competitors (id) {
        id -> Integer,
        name -> Text,
        url -> Text,
        product_sku -> Text,
    }
}

diesel::table! {
    products (sku) {
        sku -> Text,
        name -> Text,
        cost -> Double,
    }
}

diesel::joinable!(competitors -> products (product_sku));

diesel::allow_tables_to_appear_in_same_query!(competitors, products);
