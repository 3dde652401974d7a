use crate::tree::Tree;

/// Display name of the built-in skeleton, used in the confirmation line.
pub const NAME: &str = "warehouse-frontend";

/// The built-in warehouse-frontend skeleton: a Vite/React project layout
/// with every file created empty. Returned fresh on each call so callers
/// own the description they pass to the builder.
pub fn frontend() -> Tree {
    Tree::new()
        .with_file("package.json", "")
        .with_file("vite.config.js", "")
        .with_file("index.html", "")
        .with_file(".env", "")
        .with_dir("public", Tree::new().with_file("favicon.ico", ""))
        .with_dir(
            "src",
            Tree::new()
                .with_file("main.jsx", "")
                .with_file("App.jsx", "")
                .with_file("index.css", "")
                .with_dir(
                    "api",
                    Tree::new()
                        .with_file("http.js", "")
                        .with_file("auth.js", "")
                        .with_file("users.js", "")
                        .with_file("products.js", "")
                        .with_file("pickRequests.js", "")
                        .with_file("health.js", ""),
                )
                .with_dir("context", Tree::new().with_file("AuthContext.jsx", ""))
                .with_dir(
                    "components",
                    Tree::new()
                        .with_dir(
                            "Layout",
                            Tree::new()
                                .with_file("DashboardLayout.jsx", "")
                                .with_file("Sidebar.jsx", "")
                                .with_file("Topbar.jsx", ""),
                        )
                        .with_file("ProtectedRoute.jsx", "")
                        .with_file("BarcodeScanner.jsx", "")
                        .with_file("RequesterScanner.jsx", "")
                        .with_file("PickerScanner.jsx", ""),
                )
                .with_dir(
                    "pages",
                    Tree::new()
                        .with_file("LoginPage.jsx", "")
                        .with_file("DashboardPage.jsx", "")
                        .with_file("UsersPage.jsx", "")
                        .with_file("ProductsPage.jsx", "")
                        .with_file("PickRequestsPage.jsx", "")
                        .with_file("CreateRequestPage.jsx", "")
                        .with_file("PickRequestDetailPage.jsx", "")
                        .with_file("ScannerPage.jsx", "")
                        .with_file("HealthPage.jsx", ""),
                )
                .with_dir("utils", Tree::new().with_file("websocket.js", "")),
        )
}
