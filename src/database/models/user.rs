use async_graphql::SimpleObject;
use diesel::prelude::*;

use crate::{
    app::AppError,
    database::store::{insertion_order, new_id, Store},
    schema::users,
};

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, SimpleObject)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[graphql(complex)]
pub struct User {
    #[graphql(skip)]
    pub id: String,
    pub mail: String,
    ///bcrypt hash of the password
    #[graphql(skip)]
    pub pass: String,
}

impl User {
    /// Pushes a new user in the database and returns it.
    /// `pass` has to be hashed already, uniqueness of `mail` is up to the caller.
    ///
    /// # Example
    /// ```
    /// let user = User::create(&store, "mail@example.com".to_string(), hash).await?;
    /// ```
    pub async fn create(store: &Store, mail: String, pass: String) -> Result<User, AppError> {
        let user = User {
            id: new_id(),
            mail,
            pass,
        };

        store
            .run(move |conn| {
                diesel::insert_into(users::table).values(&user).execute(conn)?;
                Ok(user)
            })
            .await
    }

    /** Returns the user with the id specified */
    pub async fn find_by_id(store: &Store, user_id: &str) -> Result<Option<User>, AppError> {
        let user_id = user_id.to_owned();

        store
            .run(move |conn| {
                users::table
                    .find(user_id)
                    .select(User::as_select())
                    .first(conn)
                    .optional()
            })
            .await
    }

    /// Returns the first user registered with `mail`.
    /// If there is none, `None` is returned.
    pub async fn find_by_mail(store: &Store, mail: &str) -> Result<Option<User>, AppError> {
        let mail = mail.to_owned();

        store
            .run(move |conn| {
                users::table
                    .filter(users::mail.eq(mail))
                    .order(insertion_order())
                    .select(User::as_select())
                    .first(conn)
                    .optional()
            })
            .await
    }
}
