//! Landing page flows: quick actions plus the search box end to end
//!
//! Runs on a paused clock so debounce and blur delays elapse instantly.

use adamftd_core::{Navigator, Role, TypeaheadConfig, UserProfile};
use adamftd_dispatch::ActionCatalog;
use adamftd_e2e_tests::common::*;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::time::sleep;

/// Longer than the default debounce plus an instant static lookup
const SETTLE: Duration = Duration::from_millis(300);

#[tokio::test(start_paused = true)]
async fn test_exporter_sees_exporter_actions() {
    init_test_logging();

    let page = LandingPage::open(LandingPage::demo_profile(), TypeaheadConfig::default())
        .expect("landing page opens");
    let actions = ActionCatalog::global().actions_for_role(page.profile.role);

    let urls: Vec<String> = actions.iter().map(|a| a.target.to_url()).collect();
    assert_eq!(
        urls,
        vec![
            "/search?mode=find-buyers",
            "/compliance/check",
            "/search?mode=competitor",
            "/reports/market-entry",
        ]
    );

    // clicking a card goes straight to the navigator
    page.navigator.navigate(&actions[0].target);
    assert_eq!(page.navigator.visited(), vec!["/search?mode=find-buyers"]);
}

#[test]
fn test_unrecognized_role_gets_exporter_actions() {
    let profile = UserProfile::new("Sam", "broker", "FREE");
    assert_eq!(profile.role, Role::Exporter);
    assert_eq!(
        ActionCatalog::global().actions_for("broker"),
        ActionCatalog::global().actions_for_role(Role::Exporter)
    );
}

#[tokio::test(start_paused = true)]
async fn test_pick_hs_code_from_suggestions() {
    init_test_logging();

    let page = LandingPage::open(LandingPage::demo_profile(), TypeaheadConfig::default())
        .expect("landing page opens");
    page.search.focus().await.expect("focus");
    for partial in ["s", "st", "ste", "stee", "steel"] {
        page.search.set_query(partial).await.expect("type");
        sleep(Duration::from_millis(40)).await;
    }
    sleep(SETTLE).await;

    let state = page.search.state();
    let values: Vec<&str> = state.suggestions.iter().map(|s| s.value()).collect();
    assert_eq!(values, vec!["730890", "steel beams"]);

    page.search.blur().await.expect("blur");
    page.search.select_index(0).await.expect("select");
    sleep(SETTLE).await;

    assert_eq!(page.navigator.visited(), vec!["/search?hsCode=730890"]);
    assert!(!page.search.state().suggestions_visible);
}

#[tokio::test(start_paused = true)]
async fn test_pick_company_from_suggestions() {
    let page = LandingPage::open(LandingPage::demo_profile(), TypeaheadConfig::default())
        .expect("landing page opens");
    page.search.focus().await.expect("focus");
    page.search.set_query("Müller").await.expect("type");
    sleep(SETTLE).await;

    page.search.select_index(0).await.expect("select");
    sleep(Duration::from_millis(10)).await;

    assert_eq!(page.navigator.visited(), vec!["/companies/comp_123"]);
    assert_eq!(page.search.state().query, "Müller");
}

#[tokio::test(start_paused = true)]
async fn test_free_text_submit() {
    let page = LandingPage::open(LandingPage::demo_profile(), TypeaheadConfig::default())
        .expect("landing page opens");
    page.search
        .set_query("Automotive parts suppliers Vietnam")
        .await
        .expect("type");
    page.search.submit().await.expect("submit");
    sleep(Duration::from_millis(10)).await;

    assert_eq!(
        page.navigator.visited(),
        vec!["/search?q=Automotive+parts+suppliers+Vietnam"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_session_shuts_down_cleanly() {
    let page = LandingPage::open(LandingPage::demo_profile(), TypeaheadConfig::default())
        .expect("landing page opens");
    page.search.set_query("ger").await.expect("type");

    with_timeout(Duration::from_secs(5), async {
        page.search.shutdown().await?;
        Ok(())
    })
    .await
    .expect("session stops");
}
