use async_graphql::SimpleObject;
use diesel::prelude::*;

use crate::{
    app::AppError,
    database::store::{insertion_order, new_id, Store},
    schema::posts,
};

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, SimpleObject)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[graphql(complex)]
pub struct Post {
    #[graphql(skip)]
    pub id: String,
    pub category: String,
    pub title: String,
    pub body: String,
    /// Id of the blog the post belongs to
    #[graphql(skip)]
    pub blog: String,
}

/// Every mutable field of a post. Updates replace all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = posts)]
pub struct PostFields {
    pub category: String,
    pub title: String,
    pub body: String,
    pub blog: String,
}

impl Post {
    fn with_fields(id: String, fields: PostFields) -> Post {
        Post {
            id,
            category: fields.category,
            title: fields.title,
            body: fields.body,
            blog: fields.blog,
        }
    }

    pub async fn create(store: &Store, fields: PostFields) -> Result<Post, AppError> {
        let post = Post::with_fields(new_id(), fields);

        store
            .run(move |conn| {
                diesel::insert_into(posts::table).values(&post).execute(conn)?;
                Ok(post)
            })
            .await
    }

    pub async fn find_by_id(store: &Store, post_id: &str) -> Result<Option<Post>, AppError> {
        let post_id = post_id.to_owned();

        store
            .run(move |conn| {
                posts::table
                    .find(post_id)
                    .select(Post::as_select())
                    .first(conn)
                    .optional()
            })
            .await
    }

    /** Returns all posts of the blog, oldest first */
    pub async fn find_by_blog(store: &Store, blog_id: &str) -> Result<Vec<Post>, AppError> {
        let blog_id = blog_id.to_owned();

        store
            .run(move |conn| {
                posts::table
                    .filter(posts::blog.eq(blog_id))
                    .order(insertion_order())
                    .select(Post::as_select())
                    .load(conn)
            })
            .await
    }

    /// Overwrites every field of the post and returns the new version,
    /// `None` if no post has that id.
    pub async fn update_by_id(
        store: &Store,
        post_id: &str,
        fields: PostFields,
    ) -> Result<Option<Post>, AppError> {
        let post_id = post_id.to_owned();

        store
            .run(move |conn| {
                let updated = diesel::update(posts::table.find(post_id.as_str()))
                    .set(&fields)
                    .execute(conn)?;

                Ok((updated > 0).then(|| Post::with_fields(post_id, fields)))
            })
            .await
    }

    /// Deletes a post and returns it. Comments on it are left alone.
    pub async fn delete_by_id(store: &Store, post_id: &str) -> Result<Option<Post>, AppError> {
        let post_id = post_id.to_owned();

        store
            .run(move |conn| {
                conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    let post = posts::table
                        .find(post_id.as_str())
                        .select(Post::as_select())
                        .first(conn)
                        .optional()?;

                    if post.is_some() {
                        diesel::delete(posts::table.find(post_id.as_str())).execute(conn)?;
                    }

                    Ok(post)
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, blog: &str) -> PostFields {
        PostFields {
            category: "news".to_string(),
            title: title.to_string(),
            body: format!("{} body", title),
            blog: blog.to_string(),
        }
    }

    #[actix_rt::test]
    async fn test_create_and_find() {
        let store = Store::in_memory();

        let post = Post::create(&store, fields("hello", "b1")).await.unwrap();
        assert_eq!(post.title, "hello");
        assert_eq!(post.body, "hello body");
        assert_eq!(post.blog, "b1");

        assert_eq!(Post::find_by_id(&store, &post.id).await.unwrap(), Some(post.clone()));
        assert_eq!(Post::find_by_blog(&store, "b1").await.unwrap(), vec![post]);
    }

    #[actix_rt::test]
    async fn test_update_replaces_all_fields() {
        let store = Store::in_memory();

        let post = Post::create(&store, fields("old", "b1")).await.unwrap();
        let new_fields = PostFields {
            category: "tech".to_string(),
            title: "new".to_string(),
            body: "new body".to_string(),
            blog: "b2".to_string(),
        };

        let updated = Post::update_by_id(&store, &post.id, new_fields.clone())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated, Post::with_fields(post.id.clone(), new_fields));
        assert_eq!(Post::find_by_id(&store, &post.id).await.unwrap(), Some(updated));
        assert!(Post::find_by_blog(&store, "b1").await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_missing_post() {
        let store = Store::in_memory();

        assert_eq!(Post::update_by_id(&store, "nope", fields("x", "b1")).await.unwrap(), None);
        assert_eq!(Post::delete_by_id(&store, "nope").await.unwrap(), None);
    }

    #[actix_rt::test]
    async fn test_delete_by_id() {
        let store = Store::in_memory();

        let post = Post::create(&store, fields("bye", "b1")).await.unwrap();
        assert_eq!(Post::delete_by_id(&store, &post.id).await.unwrap(), Some(post.clone()));
        assert_eq!(Post::find_by_id(&store, &post.id).await.unwrap(), None);
    }
}
