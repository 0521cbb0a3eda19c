use catalog_admin::domain::product::Product;
use catalog_admin::forms::product::ProductForm;
use tera::{Context, Tera};

fn tera() -> Tera {
    Tera::new("templates/**/*").expect("templates should parse")
}

fn product(id: &str, title: &str, img: Vec<&str>) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: String::new(),
        description: String::new(),
        img: img.into_iter().map(String::from).collect(),
        colorback: "#ffffff".to_string(),
        colorback2: "#ffffff".to_string(),
    }
}

fn index_context(products: &[Product], active_edit: Option<&ProductForm>) -> Context {
    let mut context = Context::new();
    context.insert("alerts", &Vec::<(String, String)>::new());
    context.insert("current_page", "index");
    context.insert("products", products);
    context.insert("active_edit", &active_edit);
    let img_text = active_edit
        .map(|draft| draft.img.join("\n"))
        .unwrap_or_default();
    context.insert("img_text", &img_text);
    context.insert("upload_endpoint", "http://uploader.example/upload");
    context
}

#[test]
fn test_index_renders_one_row_per_product_in_order() {
    let products = vec![
        product("1", "Alpha", vec!["http://img/a.png"]),
        product("2", "Beta", vec![]),
        product("3", "Gamma", vec![""]),
    ];

    let html = tera()
        .render("main/index.html", &index_context(&products, None))
        .unwrap();

    let alpha = html.find("Alpha").expect("Alpha row");
    let beta = html.find("Beta").expect("Beta row");
    let gamma = html.find("Gamma").expect("Gamma row");
    assert!(alpha < beta && beta < gamma);

    // Only the product with a non-empty first image gets a thumbnail.
    assert_eq!(html.matches("<img src=").count(), 1);
    assert!(html.contains(r#"<img src="http://img/a.png""#));

    // No edit overlay without an active draft.
    assert!(!html.contains("Edit Product"));
}

#[test]
fn test_index_renders_edit_overlay_with_draft_values() {
    let products = vec![product("7", "Alpha", vec!["u1"])];
    let draft = ProductForm::edit(&products[0]);

    let html = tera()
        .render("main/index.html", &index_context(&products, Some(&draft)))
        .unwrap();

    assert!(html.contains("Edit Product"));
    assert!(html.contains(r#"name="id" value="7""#));
    assert!(html.contains(r#"name="title" value="Alpha""#));
    assert!(html.contains(r#"action="/product/save""#));
    assert!(html.contains("u1"));
}

#[test]
fn test_add_form_renders_defaults_and_upload_hint() {
    let mut context = Context::new();
    context.insert("alerts", &Vec::<(String, String)>::new());
    context.insert("current_page", "add_product");
    let form = ProductForm::default();
    context.insert("form", &form);
    context.insert("img_text", &form.img.join("\n"));
    context.insert("upload_endpoint", "http://uploader.example/upload");

    let html = tera().render("products/add.html", &context).unwrap();

    assert!(html.contains("Add New Product"));
    assert!(html.contains("Max 12 images"));
    assert!(html.contains(r##"name="colorback" value="#ffffff""##));
    assert!(html.contains(r#"data-endpoint="http://uploader.example/upload""#));
}
