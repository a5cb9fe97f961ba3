//! Relationship fields of the object types.
//!
//! Each field looks its records up again on every request, nothing is
//! cached or batched between sibling nodes.

use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::database::{
    models::{blog::Blog, comment::Comment, post::Post, user::User},
    store::Store,
};

/// Returned by `loginUser`
#[derive(Debug, Clone, SimpleObject)]
pub struct Auth {
    /// Always null, kept for existing clients
    pub id: Option<ID>,
    /// Id of the logged in user
    pub user: ID,
    pub token: String,
    /// Lifetime of the token in hours
    pub expiry: String,
}

#[ComplexObject]
impl User {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    /// Password hash, null when suppressed
    async fn pass(&self) -> Option<String> {
        (!self.pass.is_empty()).then(|| self.pass.clone())
    }

    async fn blogs(&self, ctx: &Context<'_>) -> Result<Vec<Blog>> {
        Ok(Blog::find_by_user(ctx.data::<Store>()?, &self.id).await?)
    }
}

#[ComplexObject]
impl Blog {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        Ok(User::find_by_id(ctx.data::<Store>()?, &self.user).await?)
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        Ok(Post::find_by_blog(ctx.data::<Store>()?, &self.id).await?)
    }
}

#[ComplexObject]
impl Post {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn blog(&self, ctx: &Context<'_>) -> Result<Option<Blog>> {
        Ok(Blog::find_by_id(ctx.data::<Store>()?, &self.blog).await?)
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        Ok(Comment::find_by_post(ctx.data::<Store>()?, &self.id).await?)
    }
}

#[ComplexObject]
impl Comment {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn post(&self, ctx: &Context<'_>) -> Result<Option<Post>> {
        Ok(Post::find_by_id(ctx.data::<Store>()?, &self.post).await?)
    }
}
