//! GraphQL mutation root

use async_graphql::{Context, Object, Result, ID};
use log::{debug, info};

use super::types::Auth;
use crate::{
    app::AppError,
    auth::{
        password::PasswordHasher,
        token::{TokenKeys, TOKEN_LIFETIME_HOURS},
    },
    database::{
        models::{
            blog::Blog,
            comment::Comment,
            post::{Post, PostFields},
            user::User,
        },
        store::Store,
    },
};

pub struct MutationRoot;

#[Object(name = "Mutations")]
impl MutationRoot {
    /// Registers a user. The stored password is a bcrypt hash and is left
    /// out of the returned user.
    async fn create_user(&self, ctx: &Context<'_>, mail: String, pass: String) -> Result<User> {
        let store = ctx.data::<Store>()?;
        let hasher = ctx.data::<PasswordHasher>()?;

        if User::find_by_mail(store, &mail).await?.is_some() {
            debug!("Refusing to register {} twice", mail);
            return Err(AppError::UserExists.into());
        }

        let hash = hasher.hash(pass).await?;
        let mut user = User::create(store, mail, hash).await?;
        info!("Registered user {}", user.id);

        user.pass.clear();
        Ok(user)
    }

    /// Checks the credentials and issues a token valid for one hour
    async fn login_user(&self, ctx: &Context<'_>, mail: String, pass: String) -> Result<Auth> {
        let store = ctx.data::<Store>()?;
        let hasher = ctx.data::<PasswordHasher>()?;
        let tokens = ctx.data::<TokenKeys>()?;

        let user = User::find_by_mail(store, &mail)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if !hasher.verify(pass, user.pass.clone()).await? {
            debug!("Wrong password for user {}", user.id);
            return Err(AppError::PasswordIncorrect.into());
        }

        let token = tokens.issue(&user)?;

        Ok(Auth {
            id: None,
            user: ID(user.id),
            token,
            expiry: TOKEN_LIFETIME_HOURS.to_string(),
        })
    }

    async fn create_blog(&self, ctx: &Context<'_>, name: String, user: ID) -> Result<Blog> {
        Ok(Blog::create(ctx.data::<Store>()?, name, user.0).await?)
    }

    /// Deletes a blog, its posts stay
    async fn delete_blog(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Blog>> {
        Ok(Blog::delete_by_id(ctx.data::<Store>()?, &id).await?)
    }

    async fn create_post(
        &self,
        ctx: &Context<'_>,
        category: String,
        title: String,
        body: String,
        blog: ID,
    ) -> Result<Post> {
        let fields = PostFields {
            category,
            title,
            body,
            blog: blog.0,
        };

        Ok(Post::create(ctx.data::<Store>()?, fields).await?)
    }

    /// Replaces every field of the post, null if there is no such post
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        category: String,
        title: String,
        body: String,
        blog: ID,
    ) -> Result<Option<Post>> {
        let fields = PostFields {
            category,
            title,
            body,
            blog: blog.0,
        };

        Ok(Post::update_by_id(ctx.data::<Store>()?, &id, fields).await?)
    }

    /// Deletes a post, its comments stay
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Post>> {
        Ok(Post::delete_by_id(ctx.data::<Store>()?, &id).await?)
    }

    async fn create_comment(&self, ctx: &Context<'_>, comment: String, post: ID) -> Result<Comment> {
        Ok(Comment::create(ctx.data::<Store>()?, comment, post.0).await?)
    }

    /// Deletes every comment on the post and returns them
    async fn delete_comments(&self, ctx: &Context<'_>, post: ID) -> Result<Vec<Comment>> {
        Ok(Comment::delete_by_post(ctx.data::<Store>()?, &post).await?)
    }
}
