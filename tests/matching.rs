//! Matching properties of the route table.

use route_table::routing::{find, normalize, MatchError, RouteDescriptor, RouteTable, Verb};

fn route(path: &str, name: &str) -> RouteDescriptor {
    RouteDescriptor::builder(path, name).build().unwrap()
}

fn table(paths: &[&str]) -> RouteTable {
    RouteTable::new(paths.iter().map(|p| route(p, p)))
}

macro_rules! match_tests {
    (@check $table:ident, $path:literal, None) => {
        assert_eq!(
            $table.at($path),
            Err(MatchError::NotFound),
            "expected no match for '{}'",
            $path
        );
    };
    (@check $table:ident, $path:literal, ($route:literal $(, $key:literal => $val:literal)*)) => {
        match $table.at($path) {
            Ok(matched) => {
                assert_eq!(matched.route.path, $route, "wrong route for '{}'", $path);
                let expected: Vec<(&str, &str)> = vec![$(($key, $val)),*];
                assert_eq!(
                    matched.params.iter().collect::<Vec<_>>(),
                    expected,
                    "wrong params for '{}'",
                    $path
                );
            }
            Err(_) => panic!("expected '{}' to match '{}'", $path, $route),
        }
    };
    ($($name:ident {
        routes = $routes:expr,
        $( $path:literal => $expected:tt ),* $(,)?
    }),* $(,)?) => { $(
        #[test]
        fn $name() {
            let table = table(&$routes);
            $( match_tests!(@check table, $path, $expected); )*
        }
    )* };
}

match_tests! {
    static_routes {
        routes = ["/", "/about", "/users/list"],
        "/" => ("/"),
        "/about" => ("/about"),
        "/users/list" => ("/users/list"),
        "/abou" => None,
        "/aboutx" => None,
        "/About" => None,
        "/users/lis" => None,
        "/users/list/" => None,
        "" => None,
    },
    single_placeholder {
        routes = ["/users/{id}"],
        "/users/42" => ("/users/{id}", "id" => "42"),
        "/users/abc-def" => ("/users/{id}", "id" => "abc-def"),
        "/users" => None,
        "/users/" => None,
        "/users/42/edit" => None,
        "/x/users/42" => None,
    },
    multiple_placeholders {
        routes = ["/orgs/{org}/repos/{repo}"],
        "/orgs/rust/repos/regex" => ("/orgs/{org}/repos/{repo}", "org" => "rust", "repo" => "regex"),
        "/orgs/rust/repos" => None,
        "/orgs//repos/regex" => None,
    },
    shadowing {
        routes = ["/a/{id}", "/a/static"],
        "/a/static" => ("/a/{id}", "id" => "static"),
        "/a/1" => ("/a/{id}", "id" => "1"),
    },
    trailing_slash_templates {
        routes = ["/users/", "/users/{id}/edit/"],
        "/users" => ("/users/"),
        "/users/" => None,
        "/users/3/edit" => ("/users/{id}/edit/", "id" => "3"),
    },
    literal_braces_in_request {
        routes = ["/files/{name}", "/raw"],
        "/files/{name}" => ("/files/{name}", "name" => "{name}"),
        "/raw{}" => None,
    },
}

#[test]
fn test_empty_table_never_matches() {
    let table = RouteTable::new(Vec::new());
    for path in ["/", "/users", "/users/1", ""] {
        assert_eq!(find(&table, path), Err(MatchError::NotFound));
    }
}

#[test]
fn test_trailing_slash_matches_after_normalize() {
    let table = table(&["/users/{id}", "/users"]);

    assert!(table.at("/users/").is_err());
    assert_eq!(
        table.at(&normalize("/users/", "")).unwrap().route.path,
        "/users"
    );
    assert_eq!(
        table
            .at(&normalize("/app/users/7/", "/app"))
            .unwrap()
            .params
            .get("id"),
        Some("7")
    );
}

#[test]
fn test_trailing_slash_template_matches_normalized_paths() {
    let table = table(&["/users/"]);
    assert!(table.rejected().is_empty());

    for uri in ["/users/", "/users", "/app/users/", "/app/users"] {
        let matched = table.at(&normalize(uri, "/app")).unwrap();
        assert_eq!(matched.route.path, "/users/", "'{}' should match", uri);
    }
}

#[test]
fn test_descriptor_fields_round_trip() {
    let descriptor = RouteDescriptor::builder("/admin/users/{id}", "admin.users.delete")
        .controller("AdminUserController")
        .method("destroy")
        .verb(Verb::Delete)
        .auth(true)
        .admin(true)
        .build()
        .unwrap();
    let table = RouteTable::new([descriptor.clone()]);

    let matched = table.at("/admin/users/3").unwrap();
    assert_eq!(*matched.route, descriptor);
    assert_eq!(matched.route.verb.as_str(), "delete");
}

#[test]
fn test_repeated_matches_are_identical() {
    let table = table(&["/a/{x}", "/b/{y}/c"]);

    let first = table.at("/b/1/c");
    let _ = table.at("/a/2");
    let second = table.at("/b/1/c");

    assert_eq!(first, second);
    assert_eq!(table.at("/nope"), table.at("/nope"));
}

#[test]
fn test_one_character_difference_never_matches() {
    let template = "/reports/annual/summary";
    let table = table(&[template]);

    assert!(table.at(template).is_ok());
    for i in 1..template.len() {
        let mut changed = template.to_string();
        changed.replace_range(i..i + 1, "#");
        assert!(table.at(&changed).is_err(), "'{}' should not match", changed);
    }
}
