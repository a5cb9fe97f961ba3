table! {
    users (id) {
        id -> Text,
        mail -> Text,
        pass -> Text,
    }
}

table! {
    blogs (id) {
        id -> Text,
        name -> Text,
        user -> Text,
    }
}

table! {
    posts (id) {
        id -> Text,
        category -> Text,
        title -> Text,
        body -> Text,
        blog -> Text,
    }
}

table! {
    comments (id) {
        id -> Text,
        comment -> Text,
        post -> Text,
    }
}

/// Run once on every new pooled connection.
/// References between tables are plain text columns, nothing is enforced.
pub const SETUP_SQL: &str = "
    PRAGMA busy_timeout = 5000;
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY NOT NULL,
        mail TEXT NOT NULL,
        pass TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS users_mail ON users (mail);
    CREATE TABLE IF NOT EXISTS blogs (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        user TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS blogs_user ON blogs (user);
    CREATE TABLE IF NOT EXISTS posts (
        id TEXT PRIMARY KEY NOT NULL,
        category TEXT NOT NULL,
        title TEXT NOT NULL,
        body TEXT NOT NULL,
        blog TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS posts_blog ON posts (blog);
    CREATE TABLE IF NOT EXISTS comments (
        id TEXT PRIMARY KEY NOT NULL,
        comment TEXT NOT NULL,
        post TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS comments_post ON comments (post);
";
