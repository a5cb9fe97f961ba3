use async_graphql::SimpleObject;
use diesel::prelude::*;

use crate::{
    app::AppError,
    database::store::{insertion_order, new_id, Store},
    schema::blogs,
};

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, SimpleObject)]
#[diesel(table_name = blogs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[graphql(complex)]
pub struct Blog {
    #[graphql(skip)]
    pub id: String,
    pub name: String,
    /// Id of the owning user, not checked against the users table
    #[graphql(skip)]
    pub user: String,
}

impl Blog {
    pub async fn create(store: &Store, name: String, user: String) -> Result<Blog, AppError> {
        let blog = Blog {
            id: new_id(),
            name,
            user,
        };

        store
            .run(move |conn| {
                diesel::insert_into(blogs::table).values(&blog).execute(conn)?;
                Ok(blog)
            })
            .await
    }

    pub async fn find_by_id(store: &Store, blog_id: &str) -> Result<Option<Blog>, AppError> {
        let blog_id = blog_id.to_owned();

        store
            .run(move |conn| {
                blogs::table
                    .find(blog_id)
                    .select(Blog::as_select())
                    .first(conn)
                    .optional()
            })
            .await
    }

    /** Returns all blogs owned by the user, oldest first */
    pub async fn find_by_user(store: &Store, user_id: &str) -> Result<Vec<Blog>, AppError> {
        let user_id = user_id.to_owned();

        store
            .run(move |conn| {
                blogs::table
                    .filter(blogs::user.eq(user_id))
                    .order(insertion_order())
                    .select(Blog::as_select())
                    .load(conn)
            })
            .await
    }

    /// Deletes a blog and returns it, `None` if there was nothing to delete.
    /// Posts of the blog are left alone.
    pub async fn delete_by_id(store: &Store, blog_id: &str) -> Result<Option<Blog>, AppError> {
        let blog_id = blog_id.to_owned();

        store
            .run(move |conn| {
                conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    let blog = blogs::table
                        .find(blog_id.as_str())
                        .select(Blog::as_select())
                        .first(conn)
                        .optional()?;

                    if blog.is_some() {
                        diesel::delete(blogs::table.find(blog_id.as_str())).execute(conn)?;
                    }

                    Ok(blog)
                })
            })
            .await
    }
}
