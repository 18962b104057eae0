mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

#[tokio::test]
async fn created_ticket_is_listed_first() -> Result<()> {
    let server = TestServer::spawn().await?;
    let museum = server.login(common::MUSEUM_EMAIL).await?;
    let path = format!("/api/institutions/{}/tickets", common::MUSEUM_ID);

    let res = server
        .post(
            &path,
            &museum,
            json!({ "name": "Family Pass", "price": 25, "description": "Two adults and up to three children." }),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["data"]["id"].as_str().unwrap_or_default().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["data"]["isActive"], true);
    assert_eq!(created["data"]["institutionId"], common::MUSEUM_ID);
    assert_eq!(created["message"], "Ticket created");

    let listed: Value = server.get(&path, Some(&museum)).await?.json().await?;
    assert_eq!(listed["data"][0]["id"], id.as_str());
    assert_eq!(listed["data"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn invalid_ticket_reports_field_errors() -> Result<()> {
    let server = TestServer::spawn().await?;
    let museum = server.login(common::MUSEUM_EMAIL).await?;
    let path = format!("/api/institutions/{}/tickets", common::MUSEUM_ID);

    let res = server
        .post(&path, &museum, json!({ "name": "X", "price": -1, "description": "short" }))
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    for field in ["name", "price", "description"] {
        assert!(body["fieldErrors"][field].is_string(), "{field}");
    }

    let listed: Value = server.get(&path, Some(&museum)).await?.json().await?;
    assert_eq!(listed["data"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<()> {
    let server = TestServer::spawn().await?;
    let museum = server.login(common::MUSEUM_EMAIL).await?;

    let res = reqwest::Client::new()
        .post(server.url(&format!("/api/institutions/{}/tickets", common::MUSEUM_ID)))
        .bearer_auth(&museum)
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "BAD_REQUEST");
    Ok(())
}

#[tokio::test]
async fn ticket_update_and_delete() -> Result<()> {
    let server = TestServer::spawn().await?;
    let museum = server.login(common::MUSEUM_EMAIL).await?;
    let path = format!("/api/institutions/{}/tickets", common::MUSEUM_ID);

    let listed: Value = server.get(&path, Some(&museum)).await?.json().await?;
    let ticket_id = listed["data"][0]["id"].as_str().unwrap_or_default().to_string();

    let res = server
        .put(&format!("{path}/{ticket_id}"), &museum, json!({ "price": "7.5", "isActive": false }))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["data"]["price"], 7.5);
    assert_eq!(updated["data"]["isActive"], false);
    assert_eq!(updated["data"]["name"], listed["data"][0]["name"]);

    let res = server.delete(&format!("{path}/{ticket_id}"), &museum).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["success"], true);

    let res = server.delete(&format!("{path}/{ticket_id}"), &museum).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn announcement_lifecycle() -> Result<()> {
    let server = TestServer::spawn().await?;
    let museum = server.login(common::MUSEUM_EMAIL).await?;
    let path = format!("/api/institutions/{}/announcements", common::MUSEUM_ID);

    let res = server
        .post(&path, &museum, json!({ "title": "Night Opening", "content": "Galleries stay open until 22:00 on Fridays." }))
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["data"]["id"].as_str().unwrap_or_default().to_string();

    let listed: Value = server.get(&path, Some(&museum)).await?.json().await?;
    assert_eq!(listed["data"][0]["id"], id.as_str());

    let res = server
        .put(&format!("{path}/{id}"), &museum, json!({ "title": "Late Night Opening" }))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["data"]["title"], "Late Night Opening");
    assert_eq!(updated["data"]["content"], "Galleries stay open until 22:00 on Fridays.");

    let res = server.put(&format!("{path}/{id}"), &museum, json!({ "content": "short" })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server.delete(&format!("{path}/{id}"), &museum).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let listed: Value = server.get(&path, Some(&museum)).await?.json().await?;
    assert!(listed["data"].as_array().is_some_and(|l| l.iter().all(|a| a["id"] != id.as_str())));
    Ok(())
}

#[tokio::test]
async fn profile_update_preserves_identity() -> Result<()> {
    let server = TestServer::spawn().await?;
    let museum = server.login(common::MUSEUM_EMAIL).await?;
    let path = format!("/api/institutions/{}", common::MUSEUM_ID);

    let res = server
        .put(
            &path,
            &museum,
            json!({
                "id": "someone-else",
                "isVerified": false,
                "name": "Bardo Museum",
                "workingHours": { "monday": { "isOpen": true, "openTime": "10:00", "closeTime": "16:00" } }
            }),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["id"], common::MUSEUM_ID);
    assert_eq!(body["data"]["isVerified"], true);
    assert_eq!(body["data"]["name"], "Bardo Museum");
    assert_eq!(body["data"]["workingHours"]["monday"]["isOpen"], true);
    assert_eq!(body["data"]["workingHours"]["sunday"]["closeTime"], "13:00");

    let fetched: Value = server.get(&path, Some(&museum)).await?.json().await?;
    assert_eq!(fetched["data"]["name"], "Bardo Museum");

    let res = server
        .put(&path, &museum, json!({ "workingHours": { "monday": { "isOpen": true, "openTime": "9am", "closeTime": "16:00" } } }))
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn institution_stats_are_served_to_the_owner() -> Result<()> {
    let server = TestServer::spawn().await?;
    let museum = server.login(common::MUSEUM_EMAIL).await?;

    let res = server
        .get(&format!("/api/institutions/{}/stats", common::MUSEUM_ID), Some(&museum))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["visitors"], 50);
    assert!(body["data"]["revenue"].is_number());
    assert_eq!(body["data"]["revenueTrend"].as_array().map(Vec::len), Some(6));
    Ok(())
}

#[tokio::test]
async fn profile_update_on_unknown_institution_is_not_found_before_validation() -> Result<()> {
    let server = TestServer::spawn().await?;
    let admin = server.login(common::ADMIN_EMAIL).await?;

    for body in [json!({ "name": "x" }), json!({ "name": "Valid Name" })] {
        let res = server.put("/api/institutions/no-such-institution", &admin, body).await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = res.json().await?;
        assert_eq!(body["code"], "NOT_FOUND");
    }
    Ok(())
}
