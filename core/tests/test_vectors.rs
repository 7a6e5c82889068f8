//! Verify every resource `build_*` method against the JSON vectors stored in
//! `test-vectors/`.
//!
//! Each case names an operation, its input and the expected method, path,
//! ordered query pairs and body. Bodies are compared as parsed JSON so field
//! order does not matter.

use admin_core::api::{
    AnnouncementForm, BillQuery, CardForm, CardQuery, CustomerForm, CustomerQuery, LoginForm, OrderQuery,
    PhoneBatch, PhoneForm, PhoneQuery, ProjectForm, ProjectKeywords, ProjectQuery, RegionForm, UserForm,
};
use admin_core::{AdminClient, HttpMethod, HttpRequest, MultipartForm, RequestBody};
use serde::de::DeserializeOwned;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> AdminClient {
    AdminClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn input<T: DeserializeOwned>(case: &Value) -> T {
    serde_json::from_value(case["input"].clone()).unwrap()
}

fn icon_form() -> MultipartForm {
    MultipartForm::new().file("file", "icon.png", "image/png", vec![0x89, 0x50])
}

fn build(case: &Value) -> HttpRequest {
    let c = client();
    let op = case["operation"].as_str().unwrap();
    match op {
        "publish_announcement" => c.build_publish_announcement(&input::<AnnouncementForm>(case)).unwrap(),
        "list_announcements" => c.build_list_announcements(),
        "delete_announcement" => c.build_delete_announcement(input(case)),
        "user_bill" => c.build_user_bill(&input::<BillQuery>(case)).unwrap(),
        "order_bill" => c.build_order_bill(&input::<BillQuery>(case)).unwrap(),
        "order_detail" => c.build_order_detail(&input::<String>(case)),
        "list_cards" => c.build_list_cards(&input::<CardQuery>(case)).unwrap(),
        "edit_card" => c.build_edit_card(&input::<CardForm>(case)).unwrap(),
        "reset_card_password" => c.build_reset_card_password(&input::<String>(case)),
        "add_card" => c.build_add_card(&input::<CardForm>(case)).unwrap(),
        "delete_card" => c.build_delete_card(&input::<String>(case)),
        "update_card_balance" => {
            let args = &case["input"];
            c.build_update_card_balance(args["userId"].as_str().unwrap(), args["amount"].as_f64().unwrap())
        }
        "list_customers" => c.build_list_customers(&input::<CustomerQuery>(case)).unwrap(),
        "list_admin_users" => c.build_list_admin_users(),
        "update_customer_status" => {
            let args = &case["input"];
            c.build_update_customer_status(
                args["userId"].as_str().unwrap(),
                args["userStatus"].as_i64().unwrap() as i32,
            )
        }
        "edit_customer" => c.build_edit_customer(&input::<CustomerForm>(case)).unwrap(),
        "reset_customer_password" => c.build_reset_customer_password(&input::<String>(case)),
        "add_customer" => c.build_add_customer(&input::<CustomerForm>(case)).unwrap(),
        "login" => c.build_login(&input::<LoginForm>(case)).unwrap(),
        "list_orders" => c.build_list_orders(&input::<OrderQuery>(case)).unwrap(),
        "settle_order" => c.build_settle_order(&input::<String>(case)),
        "list_phones" => c.build_list_phones(&input::<PhoneQuery>(case)).unwrap(),
        "add_phone" => c.build_add_phone(&input::<PhoneForm>(case)).unwrap(),
        "update_phone" => c.build_update_phone(&input::<PhoneForm>(case)).unwrap(),
        "delete_phone" => c.build_delete_phone(input(case)),
        "batch_phones" => c.build_batch_phones(&input::<PhoneBatch>(case)).unwrap(),
        "list_projects" => c.build_list_projects(&input::<ProjectQuery>(case)).unwrap(),
        "add_project" => c.build_add_project(&input::<ProjectForm>(case)).unwrap(),
        "delete_project" => c.build_delete_project(input(case)),
        "edit_project" => c.build_edit_project(&input::<ProjectForm>(case)).unwrap(),
        "upload_project_icon" => c.build_upload_project_icon(icon_form()),
        "update_project_keywords" => c.build_update_project_keywords(&input::<ProjectKeywords>(case)).unwrap(),
        "list_regions" => c.build_list_regions(),
        "delete_region" => c.build_delete_region(input(case)),
        "save_region" => c.build_save_region(&input::<RegionForm>(case)).unwrap(),
        "upload_region_icon" => c.build_upload_region_icon(icon_form()),
        "user_info" => c.build_user_info(),
        "edit_user" => c.build_edit_user(&input::<UserForm>(case)).unwrap(),
        other => panic!("unknown operation: {other}"),
    }
}

#[test]
fn resource_test_vectors() {
    let raw = include_str!("../../test-vectors/resources.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_request"];
        let req = build(case);

        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

        let expected_query: Vec<(String, String)> = expected["query"]
            .as_array()
            .unwrap()
            .iter()
            .map(|pair| {
                let pair = pair.as_array().unwrap();
                (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.query, expected_query, "{name}: query");

        match (&expected["body"], &req.body) {
            (Value::Null, None) => {}
            (Value::String(kind), Some(RequestBody::Multipart(_))) if kind == "multipart" => {
                assert!(
                    req.header("content-type").unwrap().starts_with("multipart/form-data"),
                    "{name}: content-type"
                );
            }
            (expected_body, Some(RequestBody::Json(json))) => {
                let body: Value = serde_json::from_str(json).unwrap();
                assert_eq!(&body, expected_body, "{name}: body");
                assert_eq!(req.header("content-type"), Some("application/json"), "{name}: content-type");
            }
            (expected_body, actual) => panic!("{name}: expected body {expected_body}, got {actual:?}"),
        }
    }
}

#[test]
fn deletes_never_carry_a_body() {
    let raw = include_str!("../../test-vectors/resources.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let deletes: Vec<&Value> = vectors["cases"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|case| case["expected_request"]["method"] == "DELETE")
        .collect();
    assert_eq!(deletes.len(), 5);

    for case in deletes {
        let req = build(case);
        assert!(req.body.is_none(), "{}", case["name"]);
        assert_eq!(req.query.len(), 1, "{}", case["name"]);
        let id = match &case["input"] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        assert_eq!(req.query[0].1, id, "{}", case["name"]);
    }
}
