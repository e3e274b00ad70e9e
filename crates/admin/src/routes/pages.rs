//! Server-rendered page shells for the admin panel.
//!
//! The panel itself is a client-rendered app; these handlers only serve the
//! HTML shells. Access control happens in the route guard before either
//! handler runs, so the shell handler never inspects the session itself.

use axum::Router;
use axum::response::Html;
use axum::routing::get;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(shell))
        .route("/admin/login", get(login))
        .route("/admin/{*rest}", get(shell))
}

/// The app shell served for every panel path. Client-side routing takes
/// over from here; the bootstrap sequence runs before anything renders.
async fn shell() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="robots" content="noindex">
  <title>소나버스 관리자</title>
  <link rel="stylesheet" href="/assets/admin.css">
</head>
<body>
  <div id="app"></div>
  <script type="module" src="/assets/admin.js"></script>
</body>
</html>"#,
    )
}

/// The login page. The guard redirects authenticated browsers away before
/// this renders.
async fn login() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="robots" content="noindex">
  <title>로그인 - 소나버스 관리자</title>
  <link rel="stylesheet" href="/assets/admin.css">
</head>
<body>
  <main id="login">
    <h1>소나버스 관리자</h1>
    <form id="login-form">
      <label>이메일 <input type="email" name="email" autocomplete="username" required></label>
      <label>비밀번호 <input type="password" name="password" autocomplete="current-password" required minlength="8"></label>
      <button type="submit">로그인</button>
      <p id="login-error" role="alert" hidden></p>
    </form>
  </main>
  <script type="module" src="/assets/login.js"></script>
</body>
</html>"#,
    )
}
