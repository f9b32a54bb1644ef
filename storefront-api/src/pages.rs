/// HTML pages
///
/// Every page shares one layout: a `<title>`, a menu whose links depend on
/// the session status, and the page content. All interpolated text goes
/// through [`escape`].

use axum::response::Html;
use storefront_shared::{
    auth::gate::SessionStatus,
    models::{article::Article, product::Product, user::User},
};

/// Page titles, shared with the handlers and tests
pub mod titles {
    pub const HOME: &str = "Home Page";
    pub const PRODUCTS: &str = "Products";
    pub const CREATE_ARTICLE: &str = "Create New Article";
    pub const SUBMISSION_SUCCESSFUL: &str = "Submission Successful";
    pub const LOGIN: &str = "Login";
    pub const LOGIN_SUCCESSFUL: &str = "Successful Login";
    pub const REGISTER: &str = "Register";
    pub const REGISTRATION_SUCCESSFUL: &str = "Successful registration & Login";
}

/// Escapes text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    htmlescape::encode_minimal(text)
}

fn layout(title: &str, session: SessionStatus, content: &str) -> Html<String> {
    let menu = if session.is_logged_in() {
        r#"<li><a href="/article/create">Create Article</a></li>
        <li><a href="/u/logout">Logout</a></li>"#
    } else {
        r#"<li><a href="/u/register">Register</a></li>
        <li><a href="/u/login">Login</a></li>"#
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
  </head>
  <body>
    <nav>
      <a href="/">Home</a>
      <a href="/products">Products</a>
      <ul>
        {menu}
      </ul>
    </nav>
    <main>
{content}
    </main>
  </body>
</html>
"#,
        title = escape(title),
        menu = menu,
        content = content,
    ))
}

fn alert(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(
            r#"<div class="alert" role="alert"><strong>Error:</strong> {}</div>"#,
            escape(message)
        ),
        None => String::new(),
    }
}

/// Article listing
pub fn index(session: SessionStatus, articles: &[Article]) -> Html<String> {
    let content: String = articles
        .iter()
        .map(|article| {
            format!(
                "<article><a href=\"/article/view/{id}\"><h2>{title}</h2></a><p>{body}</p></article>\n",
                id = article.id,
                title = escape(&article.title),
                body = escape(&article.content),
            )
        })
        .collect();
    layout(titles::HOME, session, &content)
}

/// Single article
pub fn article(session: SessionStatus, article: &Article) -> Html<String> {
    let content = format!(
        "<h1>{}</h1>\n<p>{}</p>",
        escape(&article.title),
        escape(&article.content)
    );
    layout(&article.title, session, &content)
}

/// Article creation form
pub fn create_article(session: SessionStatus) -> Html<String> {
    let content = r#"<h1>Create New Article</h1>
<form action="/article/create" method="POST">
  <label for="title">Title</label>
  <input type="text" name="title" id="title">
  <label for="content">Content</label>
  <textarea name="content" id="content"></textarea>
  <button type="submit">Submit</button>
</form>"#;
    layout(titles::CREATE_ARTICLE, session, content)
}

/// Confirmation after an article is created
pub fn submission_successful(session: SessionStatus, article: &Article) -> Html<String> {
    let content = format!(
        r#"<h1>The article was successfully submitted.</h1>
<p><a href="/article/view/{}">{}</a></p>"#,
        article.id,
        escape(&article.title)
    );
    layout(titles::SUBMISSION_SUCCESSFUL, session, &content)
}

/// Product table
pub fn products(session: SessionStatus, products: &[Product]) -> Html<String> {
    let rows: String = products
        .iter()
        .map(|product| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td></tr>\n",
                escape(&product.name),
                escape(&product.description),
                product.price,
                product.quantity,
            )
        })
        .collect();

    let content = format!(
        r#"<table>
<thead><tr><th>Name</th><th>Description</th><th>Price</th><th>Quantity</th></tr></thead>
<tbody>
{}</tbody>
</table>"#,
        rows
    );
    layout(titles::PRODUCTS, session, &content)
}

/// Login form, optionally with an error message
pub fn login(session: SessionStatus, error: Option<&str>) -> Html<String> {
    let content = format!(
        r#"<h1>Login</h1>
{}
<form action="/u/login" method="POST">
  <label for="username">Username</label>
  <input type="text" name="username" id="username">
  <label for="password">Password</label>
  <input type="password" name="password" id="password">
  <button type="submit">Login</button>
</form>"#,
        alert(error)
    );
    layout(titles::LOGIN, session, &content)
}

/// Confirmation after a successful login
pub fn login_successful(session: SessionStatus) -> Html<String> {
    layout(
        titles::LOGIN_SUCCESSFUL,
        session,
        "<h1>You have successfully logged in.</h1>",
    )
}

/// Registration form, optionally with an error message
pub fn register(session: SessionStatus, error: Option<&str>) -> Html<String> {
    let content = format!(
        r#"<h1>Register</h1>
{}
<form action="/u/register" method="POST">
  <label for="username">Username</label>
  <input type="text" name="username" id="username">
  <label for="password">Password</label>
  <input type="password" name="password" id="password">
  <button type="submit">Register</button>
</form>"#,
        alert(error)
    );
    layout(titles::REGISTER, session, &content)
}

/// Confirmation after registration, which also logs the user in
pub fn registration_successful(session: SessionStatus, user: &User) -> Html<String> {
    let content = format!(
        "<h1>Welcome, {}. You are now registered and logged in.</h1>",
        escape(&user.username)
    );
    layout(titles::REGISTRATION_SUCCESSFUL, session, &content)
}
