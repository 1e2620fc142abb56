#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::{NewProduct, Product, Profile, Review, ReviewAuthor};
    use chrono::Utc;
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::{Connection, Error};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[cfg(test)]
    mod tests {
        use super::*;

        // Helper function to create test database
        async fn create_test_db() -> Database {
            log!("[TEST] Creating in-memory test database");
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            log!("[TEST] Database schema created");
            db
        }

        // Test database schema creation
        #[tokio::test]
        async fn test_schema_creation() {
            log!("[TEST] Starting test_schema_creation");
            let db = create_test_db().await;

            // Verify tables exist
            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"users".to_string()));
            assert!(tables.contains(&"products".to_string()));
            assert!(tables.contains(&"reviews".to_string()));
        }

        // Sign-in is find-or-create keyed on the nickname
        #[tokio::test]
        async fn test_enter_user_is_idempotent() {
            log!("[TEST] Starting test_enter_user_is_idempotent");
            let db = create_test_db().await;

            let first = db.enter_user("wren").await.unwrap();
            let second = db.enter_user("wren").await.unwrap();
            assert_eq!(first.id, second.id);
            assert_eq!(second.nickname, "wren");
            assert!(second.avatar.is_none());
            log!("[TEST] Repeat sign-in reused user {} - PASSED", first.id);

            let other = db.enter_user("sol").await.unwrap();
            assert_ne!(first.id, other.id);

            let found = db.user_by_id(first.id).await.unwrap().unwrap();
            assert_eq!(found.nickname, "wren");
            assert!(db.user_by_id(9999).await.unwrap().is_none());
        }

        // Product creation and listing
        #[tokio::test]
        async fn test_product_lifecycle() {
            log!("[TEST] Starting test_product_lifecycle");
            let db = create_test_db().await;
            let seller = db.enter_user("sol").await.unwrap();

            log!("[TEST] Testing product insertion");
            let inserted = db
                .insert_product(
                    seller.id,
                    &NewProduct {
                        name: "Dining chair".into(),
                        price: 20,
                        description: "Solid oak, light wear".into(),
                    },
                )
                .await
                .unwrap();
            assert!(inserted.id > 0);
            assert_eq!(inserted.user_id, seller.id);
            log!("[TEST] Product insertion - PASSED");

            log!("[TEST] Testing product listing");
            let products = db.get_products().await.unwrap();
            assert_eq!(products.len(), 1);
            assert_eq!(products[0].name, "Dining chair");
            assert_eq!(products[0].price, 20);
            assert!(products[0].image.is_none());
            log!("[TEST] Product listing - PASSED");

            db.insert_product(
                seller.id,
                &NewProduct {
                    name: "Desk lamp".into(),
                    price: 8,
                    description: "Works, missing the shade".into(),
                },
            )
            .await
            .unwrap();
            assert_eq!(db.get_products().await.unwrap().len(), 2);
        }

        // The review feed is scoped to one recipient and ordered newest first,
        // with the author projected onto every row
        #[tokio::test]
        async fn test_review_feed_scope_and_order() {
            log!("[TEST] Starting test_review_feed_scope_and_order");
            let db = create_test_db().await;

            let mara = db.enter_user("mara").await.unwrap();
            let sol = db.enter_user("sol").await.unwrap();
            let wren = db.enter_user("wren").await.unwrap();

            // Two reviews addressed to mara (older inserted first), one to sol
            let older = db
                .insert_review(sol.id, mara.id, "Left the porch light on for pickup", 4)
                .await
                .unwrap();
            let newer = db
                .insert_review(wren.id, mara.id, "Exactly as described", 5)
                .await
                .unwrap();
            db.insert_review(mara.id, sol.id, "Smooth sale", 5)
                .await
                .unwrap();

            log!("[TEST] Testing feed scoping");
            let reviews = db.reviews_for_user(Some(mara.id)).await.unwrap();
            assert_eq!(reviews.len(), 2);
            for review in &reviews {
                assert_eq!(review.created_for_id, mara.id);
            }
            log!("[TEST] Feed scoping - PASSED");

            log!("[TEST] Testing newest-first ordering");
            assert_eq!(reviews[0].id, newer);
            assert_eq!(reviews[1].id, older);
            assert!(reviews[0].created_at >= reviews[1].created_at);
            log!("[TEST] Ordering - PASSED");

            log!("[TEST] Testing author projection");
            assert_eq!(reviews[0].created_by.id, wren.id);
            assert_eq!(reviews[0].created_by.nickname, "wren");
            assert!(reviews[0].created_by.avatar.is_none());
            assert_eq!(reviews[1].created_by.nickname, "sol");
            log!("[TEST] Author projection - PASSED");
        }

        // Without a signed-in user the recipient binds NULL and matches nothing
        #[tokio::test]
        async fn test_review_feed_without_user() {
            log!("[TEST] Starting test_review_feed_without_user");
            let db = create_test_db().await;

            let mara = db.enter_user("mara").await.unwrap();
            let sol = db.enter_user("sol").await.unwrap();
            db.insert_review(sol.id, mara.id, "Fair price", 5)
                .await
                .unwrap();

            let reviews = db.reviews_for_user(None).await.unwrap();
            assert!(reviews.is_empty());
            log!("[TEST] Empty feed for missing user - PASSED");
        }

        // Demo seeding only fills an empty database
        #[tokio::test]
        async fn test_demo_seed_runs_once() {
            log!("[TEST] Starting test_demo_seed_runs_once");
            let db = create_test_db().await;

            db.seed_demo_data().await.unwrap();
            let products = db.get_products().await.unwrap().len();
            assert!(products > 0);

            db.seed_demo_data().await.unwrap();
            assert_eq!(db.get_products().await.unwrap().len(), products);
            log!("[TEST] Second seed was a no-op - PASSED");
        }
    }

    // Define a struct to represent a database connection.
    // Cloning shares the same underlying connection.
    #[derive(Debug, Clone)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("Database connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the database schema
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            // 1. Users table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY,
                    nickname TEXT NOT NULL UNIQUE,
                    avatar TEXT,
                    created_at TEXT NOT NULL
                );",
            )
            .map_err(|e| {
                eprintln!("Failed creating users table: {}", e);
                e
            })?;

            // 2. Products table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS products (
                    id INTEGER PRIMARY KEY,
                    user_id INTEGER NOT NULL,
                    name TEXT NOT NULL,
                    price INTEGER NOT NULL,
                    description TEXT NOT NULL,
                    image TEXT,
                    created_at TEXT NOT NULL,
                    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
                );",
            )
            .map_err(|e| {
                eprintln!("Failed creating products table: {}", e);
                e
            })?;

            // 3. Reviews table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id INTEGER PRIMARY KEY,
                    review TEXT NOT NULL,
                    score INTEGER NOT NULL DEFAULT 1,
                    created_by_id INTEGER NOT NULL,
                    created_for_id INTEGER NOT NULL,
                    created_at TEXT NOT NULL,
                    FOREIGN KEY (created_by_id) REFERENCES users(id) ON DELETE CASCADE,
                    FOREIGN KEY (created_for_id) REFERENCES users(id) ON DELETE CASCADE
                );
                CREATE INDEX IF NOT EXISTS idx_reviews_created_for
                    ON reviews(created_for_id);",
            )
            .map_err(|e| {
                eprintln!("Failed creating reviews table: {}", e);
                e
            })?;
            Ok(())
        }

        // Find a user by nickname or create one, in a single transaction
        pub async fn enter_user(&self, nickname: &str) -> Result<Profile, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            let profile = match tx.query_row(
                "SELECT id, nickname, avatar FROM users WHERE nickname = ?",
                [nickname],
                |row| {
                    Ok(Profile {
                        id: row.get(0)?,
                        nickname: row.get(1)?,
                        avatar: row.get(2)?,
                    })
                },
            ) {
                Ok(profile) => {
                    log!("[DB] Found existing user {} ({})", profile.id, profile.nickname);
                    profile
                }
                Err(rusqlite::Error::QueryReturnedNoRows) => {
                    tx.execute(
                        "INSERT INTO users (nickname, created_at) VALUES (?, ?)",
                        rusqlite::params![nickname, Utc::now().to_rfc3339()],
                    )?;
                    let id = tx.last_insert_rowid();
                    log!("[DB] Created user {} ({})", id, nickname);
                    Profile {
                        id,
                        nickname: nickname.to_string(),
                        avatar: None,
                    }
                }
                Err(e) => return Err(e),
            };

            tx.commit()?;
            Ok(profile)
        }

        // Look up a user by ID; a stale session may reference a deleted row
        pub async fn user_by_id(&self, user_id: i64) -> Result<Option<Profile>, Error> {
            let conn = self.conn.lock().await;
            match conn.query_row(
                "SELECT id, nickname, avatar FROM users WHERE id = ?",
                [user_id],
                |row| {
                    Ok(Profile {
                        id: row.get(0)?,
                        nickname: row.get(1)?,
                        avatar: row.get(2)?,
                    })
                },
            ) {
                Ok(profile) => Ok(Some(profile)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        }

        // Insert a new product owned by the given user
        pub async fn insert_product(
            &self,
            user_id: i64,
            new_product: &NewProduct,
        ) -> Result<Product, Error> {
            let conn = self.conn.lock().await;
            let created_at = Utc::now().to_rfc3339();
            conn.execute(
                "INSERT INTO products (user_id, name, price, description, created_at)
                 VALUES (?, ?, ?, ?, ?)",
                rusqlite::params![
                    user_id,
                    &new_product.name,
                    new_product.price,
                    &new_product.description,
                    &created_at
                ],
            )?;
            let id = conn.last_insert_rowid();
            log!("[DB] Product {} inserted for user {}", id, user_id);
            Ok(Product {
                id,
                user_id,
                name: new_product.name.clone(),
                price: new_product.price,
                description: new_product.description.clone(),
                image: None,
                created_at,
            })
        }

        // Retrieve all products from the database
        pub async fn get_products(&self) -> Result<Vec<Product>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT id, user_id, name, price, description, image, created_at
                 FROM products
                 ORDER BY id ASC",
            )?;
            let products = stmt.query_map([], |row| {
                Ok(Product {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    name: row.get(2)?,
                    price: row.get(3)?,
                    description: row.get(4)?,
                    image: row.get(5)?,
                    created_at: row.get(6)?,
                })
            })?;
            let mut result = Vec::new();
            for product in products {
                result.push(product?);
            }
            logging::log!("Fetched {} products from the database", result.len());
            Ok(result)
        }

        // Record a review one user leaves for another
        pub async fn insert_review(
            &self,
            created_by_id: i64,
            created_for_id: i64,
            review: &str,
            score: i64,
        ) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO reviews (review, score, created_by_id, created_for_id, created_at)
                 VALUES (?, ?, ?, ?, ?)",
                rusqlite::params![
                    review,
                    score,
                    created_by_id,
                    created_for_id,
                    Utc::now().to_rfc3339()
                ],
            )?;
            let id = conn.last_insert_rowid();
            log!("[DB] Review {} recorded for user {}", id, created_for_id);
            Ok(id)
        }

        // Reviews addressed to one recipient, newest first, each row joined
        // with the author's public fields. A missing recipient binds NULL,
        // which matches no row.
        pub async fn reviews_for_user(
            &self,
            recipient: Option<i64>,
        ) -> Result<Vec<Review>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT r.id, r.review, r.score, r.created_for_id, r.created_at,
                        u.id, u.nickname, u.avatar
                 FROM reviews r
                 JOIN users u ON u.id = r.created_by_id
                 WHERE r.created_for_id = ?
                 ORDER BY r.created_at DESC, r.id DESC",
            )?;
            let rows = stmt.query_map([recipient], |row| {
                Ok(Review {
                    id: row.get(0)?,
                    review: row.get(1)?,
                    score: row.get(2)?,
                    created_for_id: row.get(3)?,
                    created_at: row.get(4)?,
                    created_by: ReviewAuthor {
                        id: row.get(5)?,
                        nickname: row.get(6)?,
                        avatar: row.get(7)?,
                    },
                })
            })?;

            let mut reviews = Vec::new();
            for row in rows {
                reviews.push(row?);
            }
            Ok(reviews)
        }

        // Seed a handful of demo rows so a fresh checkout has something to
        // show. Only runs against an empty database.
        pub async fn seed_demo_data(&self) -> Result<(), Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            let user_count: i64 =
                tx.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
            if user_count > 0 {
                log!("[DB] Demo seed skipped, {} users already present", user_count);
                return Ok(());
            }

            let now = Utc::now().to_rfc3339();

            tx.execute(
                "INSERT INTO users (nickname, avatar, created_at) VALUES (?, ?, ?)",
                rusqlite::params!["wren", "wren.png", &now],
            )?;
            let wren = tx.last_insert_rowid();
            tx.execute(
                "INSERT INTO users (nickname, created_at) VALUES (?, ?)",
                rusqlite::params!["sol", &now],
            )?;
            let sol = tx.last_insert_rowid();
            tx.execute(
                "INSERT INTO users (nickname, created_at) VALUES (?, ?)",
                rusqlite::params!["mara", &now],
            )?;
            let mara = tx.last_insert_rowid();

            for (user_id, name, price, description) in [
                (wren, "Walnut side table", 40, "Solid wood, light wear on one leg."),
                (sol, "Fixed-gear bike", 120, "Rides smooth, chain replaced last month."),
                (mara, "Film camera", 65, "Tested with one roll, meter works."),
            ] {
                tx.execute(
                    "INSERT INTO products (user_id, name, price, description, created_at)
                     VALUES (?, ?, ?, ?, ?)",
                    rusqlite::params![user_id, name, price, description, &now],
                )?;
            }

            for (by, for_, review, score) in [
                (sol, wren, "Quick handoff, fair price.", 5),
                (mara, wren, "Item matched the photos.", 4),
                (wren, sol, "Great buyer, showed up on time.", 5),
            ] {
                tx.execute(
                    "INSERT INTO reviews (review, score, created_by_id, created_for_id, created_at)
                     VALUES (?, ?, ?, ?, ?)",
                    rusqlite::params![review, score, by, for_, &now],
                )?;
            }

            tx.commit()?;
            log!("[DB] Demo data seeded: 3 users, 3 products, 3 reviews");
            Ok(())
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
