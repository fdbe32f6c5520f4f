pub mod about;
pub mod blog_list;
pub mod blog_post;
pub mod create_post;
pub mod dashboard;
pub mod edit_post;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;

pub use about::AboutPage;
pub use blog_list::BlogListPage;
pub use blog_post::BlogPostPage;
pub use create_post::CreatePostPage;
pub use dashboard::DashboardPage;
pub use edit_post::EditPostPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
