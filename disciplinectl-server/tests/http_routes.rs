//! Router tests: every request goes through `build_router` via `oneshot`

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use disciplinectl_server::auth::MIN_BCRYPT_COST;
use disciplinectl_server::db::{create_memory_pool, StaffMember, Student};
use disciplinectl_server::models::{NewIncident, NewStaffMember, NewStudent};
use disciplinectl_server::{build_router, AppState, AuthConfig, PasswordHasher};

struct TestApp {
    state: AppState,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let pool = create_memory_pool().await.unwrap();
        let auth = AuthConfig::with_hasher(PasswordHasher::new(MIN_BCRYPT_COST));
        let state = AppState::new(pool, auth);
        let router = build_router(state.clone(), None);
        Self { state, router }
    }

    async fn staff(&self, name: &str, username: &str, role: &str) -> StaffMember {
        self.state
            .staff()
            .create(&NewStaffMember::new(name, username, "secret", role).unwrap())
            .await
            .unwrap()
    }

    async fn student(&self, name: &str, username: &str) -> Student {
        self.state
            .students()
            .create(&NewStudent::new(name, username, "secret").unwrap())
            .await
            .unwrap()
    }

    async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post(&self, uri: &str, form: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response.headers()["location"].to_str().unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new().await;
    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#""status":"ok""#));
}

#[tokio::test]
async fn admin_login_redirects_to_admin_dashboard() {
    let app = TestApp::new().await;
    let response = app.post("/login", "username=admin&password=admin").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admindashboard");
}

#[tokio::test]
async fn student_and_staff_logins_carry_user_id() {
    let app = TestApp::new().await;
    let tom = app.student("Tom", "tom").await;
    let fay = app.staff("Fay", "fay", "faculty").await;

    let response = app.post("/login", "username=tom&password=secret").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/studentdashboard?user_id={}", tom.id));

    let response = app.post("/login", "username=fay&password=secret").await;
    assert_eq!(location(&response), format!("/facultydashboard?user_id={}", fay.id));
}

#[tokio::test]
async fn bad_login_is_unauthorized() {
    let app = TestApp::new().await;
    app.student("Tom", "tom").await;

    let response = app.post("/login", "username=tom&password=wrong").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_text(response).await;
    assert!(body.contains("Invalid credentials for username: tom. Please try again."));
}

#[tokio::test]
async fn protected_routes_require_user_id() {
    let app = TestApp::new().await;
    for uri in [
        "/studentdashboard",
        "/facultydashboard",
        "/committeedashboard?user_id=",
        "/principaldashboard?user_id=0",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert!(body_text(response).await.contains("User ID is required. Please log in."));
    }
}

#[tokio::test]
async fn wrong_role_is_forbidden() {
    let app = TestApp::new().await;
    let fay = app.staff("Fay", "fay", "faculty").await;

    let response = app.get(&format!("/committeedashboard?user_id={}", fay.id)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(body_text(response).await.contains("Unauthorized access"));

    let response = app.get(&format!("/facultydashboard?user_id={}", fay.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_student_is_not_found() {
    let app = TestApp::new().await;
    let response = app.get("/studentdashboard?user_id=99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Student not found"));
}

#[tokio::test]
async fn staff_crud_round_trip() {
    let app = TestApp::new().await;

    let response = app
        .post("/add_staff", "name=Pat&username=pat&password=pw&role=principal")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/staffmembers?message=Staff%20added%20successfully");

    let pat = app.state.staff().list().await.unwrap().remove(0);
    assert_ne!(pat.password_hash, "pw");

    let response = app
        .post("/add_staff", "name=Other&username=pat&password=pw&role=faculty")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("username is already taken"));

    let response = app
        .post(
            &format!("/edit_staff/{}", pat.id),
            "name=Patricia&username=pat&password=pw2&role=principal",
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        app.state.staff().get(pat.id).await.unwrap().unwrap().name,
        "Patricia"
    );

    let response = app.post(&format!("/delete_staff/{}", pat.id), "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let response = app.post(&format!("/delete_staff/{}", pat.id), "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Staff not found"));
}

#[tokio::test]
async fn invalid_staff_role_rerenders_form() {
    let app = TestApp::new().await;
    let response = app
        .post("/add_staff", "name=Jan&username=jan&password=pw&role=janitor")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("Error adding staff"));
    assert!(body.contains(r#"value="jan""#));
}

#[tokio::test]
async fn duplicate_staff_keeps_role_selected() {
    let app = TestApp::new().await;
    app.staff("Pat", "pat", "principal").await;

    let response = app
        .post("/add_staff", "name=Pat+Two&username=pat&password=pw&role=+Faculty+")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("username is already taken"));
    assert!(body.contains(r#"<option value="faculty" selected>"#));
}

#[tokio::test]
async fn edit_unknown_student_is_not_found() {
    let app = TestApp::new().await;
    let response = app.get("/edit_student/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = app
        .post("/edit_student/42", "name=Tom&username=tom&password=pw")
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn faculty_reports_incident() {
    let app = TestApp::new().await;
    let fay = app.staff("Fay", "fay", "faculty").await;
    let cam = app.staff("Cam", "cam", "committee").await;
    let tom = app.student("Tom", "tom").await;

    let form = format!(
        "user_id={}&student_id={}&student_name=Tom&class_name=10B&department=Science\
         &committee_member_id={}&incident_date=2024-03-01&description=Broke+a+beaker",
        fay.id, tom.id, cam.id
    );
    let response = app.post("/fd_submit_incident", &form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!(
            "/fd_disciplineincidents?user_id={}&message=Incident%20reported%20successfully",
            fay.id
        )
    );

    let assigned = app.state.incidents().list_by_committee_member(cam.id).await.unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].description, "Broke a beaker");

    let response = app.get(&format!("/sd_disciplineincidents?user_id={}", tom.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Broke a beaker"));
}

#[tokio::test]
async fn invalid_committee_member_keeps_submitted_fields() {
    let app = TestApp::new().await;
    let fay = app.staff("Fay", "fay", "faculty").await;

    let fay_id = fay.id.to_string();
    for bad in ["abc", "999", fay_id.as_str()] {
        let form = format!(
            "user_id={}&student_id=7&student_name=Tom&class_name=10B&department=Science\
             &committee_member_id={bad}&incident_date=2024-03-01&description=Late",
            fay.id
        );
        let response = app.post("/fd_submit_incident", &form).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_text(response).await;
        assert!(body.contains(&format!("Validation error: Invalid committee member ID: {bad}")));
        assert!(body.contains(r#"value="10B""#));
        assert!(body.contains(r#"value="Science""#));
        assert!(body.contains(&format!(r#"<option value="{bad}" selected>"#)));
        assert!(body.contains("Late</textarea>"));
    }

    assert!(app.state.incidents().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_incident_insert_is_500_with_form_refilled() {
    let app = TestApp::new().await;
    let fay = app.staff("Fay", "fay", "faculty").await;

    sqlx::query("DROP TABLE discipline_incidents")
        .execute(&app.state.pool)
        .await
        .unwrap();

    let form = format!(
        "user_id={}&student_id=7&student_name=Tom&class_name=10B&department=Science\
         &committee_member_id=&incident_date=2024-03-01&description=Late",
        fay.id
    );
    let response = app.post("/fd_submit_incident", &form).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(response).await;
    assert!(body.contains("Error reporting incident: An internal error occurred"));
    assert!(body.contains(r#"value="10B""#));
    assert!(body.contains("Late</textarea>"));
}

#[tokio::test]
async fn incident_submission_requires_faculty() {
    let app = TestApp::new().await;
    let cam = app.staff("Cam", "cam", "committee").await;

    let response = app
        .post("/fd_submit_incident", "student_id=7&student_name=Tom")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let form = format!("user_id={}&student_id=7&student_name=Tom", cam.id);
    let response = app.post("/fd_submit_incident", &form).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn committee_assigns_action_to_own_incident() {
    let app = TestApp::new().await;
    let cam = app.staff("Cam", "cam", "committee").await;
    let other = app.staff("Dee", "dee", "committee").await;
    let tom = app.student("Tom", "tom").await;

    let mine = app
        .state
        .incidents()
        .create(
            &NewIncident::new(
                &tom.id.to_string(), "Tom", "10B", "Science", Some(cam.id), "2024-03-01", "Late",
            )
            .unwrap(),
        )
        .await
        .unwrap();
    let theirs = app
        .state
        .incidents()
        .create(
            &NewIncident::new(
                &tom.id.to_string(), "Tom", "10B", "Science", Some(other.id), "2024-03-02", "Rude",
            )
            .unwrap(),
        )
        .await
        .unwrap();

    let response = app.get(&format!("/cd_disciplineincidents?user_id={}", cam.id)).await;
    let body = body_text(response).await;
    assert!(body.contains("Late"));
    assert!(!body.contains("Rude"));

    let form = format!(
        "user_id={}&incident_id={}&student_id={}\
         &action_description=Detention&assigned_date=2024-03-03",
        cam.id, mine.id, tom.id
    );
    let response = app.post("/cd_assign_action", &form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!(
            "/cd_disciplineincidents?user_id={}&message=Action%20assigned%20successfully",
            cam.id
        )
    );

    let form = format!(
        "user_id={}&incident_id={}&student_id={}\
         &action_description=Detention&assigned_date=2024-03-03",
        cam.id, theirs.id, tom.id
    );
    let response = app.post("/cd_assignactions", &form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response)
        .await
        .contains(&format!("incident {} is not assigned to you", theirs.id)));

    let response = app.get(&format!("/sd_viewdisciplineactions?user_id={}", tom.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Detention"));

    let actions = app.state.actions().list().await.unwrap();
    assert_eq!(actions.len(), 1);
}

#[tokio::test]
async fn committee_actions_page_shows_banner() {
    let app = TestApp::new().await;
    let cam = app.staff("Cam", "cam", "committee").await;

    let response = app
        .get(&format!("/cd_disciplineactions?user_id={}&message=Saved+it", cam.id))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"<p class="message">Saved it</p>"#));
}

#[tokio::test]
async fn logout_redirects_to_login() {
    let app = TestApp::new().await;
    let response = app.get("/logout").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}
