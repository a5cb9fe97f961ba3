//! GraphQL query root

use async_graphql::{Context, Object, Result, ID};

use crate::database::{
    models::{blog::Blog, comment::Comment, post::Post},
    store::Store,
};

/// Read access to blogs, posts and comments.
/// Every argument is nullable, a null lookup resolves to null and a null
/// filter to an empty list.
pub struct QueryRoot;

#[Object(name = "Queries")]
impl QueryRoot {
    async fn blog(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Blog>> {
        let Some(id) = id else { return Ok(None) };

        Ok(Blog::find_by_id(ctx.data::<Store>()?, &id).await?)
    }

    /// Blogs owned by a user
    async fn blogs(&self, ctx: &Context<'_>, user: Option<ID>) -> Result<Vec<Blog>> {
        let Some(user) = user else { return Ok(Vec::new()) };

        Ok(Blog::find_by_user(ctx.data::<Store>()?, &user).await?)
    }

    async fn post(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Post>> {
        let Some(id) = id else { return Ok(None) };

        Ok(Post::find_by_id(ctx.data::<Store>()?, &id).await?)
    }

    /// Posts of a blog
    async fn posts(&self, ctx: &Context<'_>, blog: Option<ID>) -> Result<Vec<Post>> {
        let Some(blog) = blog else { return Ok(Vec::new()) };

        Ok(Post::find_by_blog(ctx.data::<Store>()?, &blog).await?)
    }

    async fn comment(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Comment>> {
        let Some(id) = id else { return Ok(None) };

        Ok(Comment::find_by_id(ctx.data::<Store>()?, &id).await?)
    }

    /// Comments of a blog. Comments only reference their post, so this is
    /// always empty; use `post { comments }` instead.
    async fn comments(&self, ctx: &Context<'_>, blog: Option<ID>) -> Result<Vec<Comment>> {
        let Some(blog) = blog else { return Ok(Vec::new()) };

        Ok(Comment::find_by_blog(ctx.data::<Store>()?, &blog).await?)
    }
}
