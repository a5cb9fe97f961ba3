use async_graphql::SimpleObject;
use diesel::prelude::*;

use crate::{
    app::AppError,
    database::store::{insertion_order, new_id, Store},
    schema::comments,
};

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, SimpleObject)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[graphql(complex)]
pub struct Comment {
    #[graphql(skip)]
    pub id: String,
    pub comment: String,
    /// Id of the commented post
    #[graphql(skip)]
    pub post: String,
}

impl Comment {
    /** Creates a comment on the post specified */
    pub async fn create(store: &Store, comment: String, post: String) -> Result<Comment, AppError> {
        let record = Comment {
            id: new_id(),
            comment,
            post,
        };

        store
            .run(move |conn| {
                diesel::insert_into(comments::table).values(&record).execute(conn)?;
                Ok(record)
            })
            .await
    }

    /** Returns comment with the id specified */
    pub async fn find_by_id(store: &Store, comment_id: &str) -> Result<Option<Comment>, AppError> {
        let comment_id = comment_id.to_owned();

        store
            .run(move |conn| {
                comments::table
                    .find(comment_id)
                    .select(Comment::as_select())
                    .first(conn)
                    .optional()
            })
            .await
    }

    /** Returns all comments posted on a post, oldest first */
    pub async fn find_by_post(store: &Store, post_id: &str) -> Result<Vec<Comment>, AppError> {
        let post_id = post_id.to_owned();

        store
            .run(move |conn| {
                comments::table
                    .filter(comments::post.eq(post_id))
                    .order(insertion_order())
                    .select(Comment::as_select())
                    .load(conn)
            })
            .await
    }

    /// Comments only reference their post, so no comment ever matches a blog.
    pub async fn find_by_blog(_store: &Store, _blog_id: &str) -> Result<Vec<Comment>, AppError> {
        Ok(Vec::new())
    }

    /** Deletes every comment on the post and returns what was removed */
    pub async fn delete_by_post(store: &Store, post_id: &str) -> Result<Vec<Comment>, AppError> {
        let post_id = post_id.to_owned();

        store
            .run(move |conn| {
                conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    let removed = comments::table
                        .filter(comments::post.eq(post_id.as_str()))
                        .order(insertion_order())
                        .select(Comment::as_select())
                        .load(conn)?;

                    diesel::delete(comments::table.filter(comments::post.eq(post_id.as_str())))
                        .execute(conn)?;

                    Ok(removed)
                })
            })
            .await
    }
}
