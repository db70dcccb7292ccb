use crate::components::layout::Layout;
use crate::i18n::{t, tr_with};
use crate::routes::Route;
use scenarist_core::BlogPost;
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct BlogIndexPageProps {
    pub posts: Vec<BlogPost>,
}

fn published_line(post: &BlogPost) -> Html {
    let date = post.published_label();
    html! {
        <p class="published">
            <time datetime={post.published.to_string()}>
                { tr_with("blog.published", &[("date", date.as_str())]) }
            </time>
        </p>
    }
}

#[function_component(BlogIndexPage)]
pub fn blog_index_page(props: &BlogIndexPageProps) -> Html {
    let entries = props.posts.iter().map(|post| {
        let href = Route::blog_post(&post.slug).to_path();
        html! {
            <article class="post-summary">
                <h2><a href={href.clone()}>{ post.title.clone() }</a></h2>
                { published_line(post) }
                <p>{ post.summary.clone() }</p>
                <a href={href}>{ t("blog.read") }</a>
            </article>
        }
    });
    html! {
        <Layout active={Some(Route::Blog)}>
            <section class="panel blog">
                <h1>{ t("blog.title") }</h1>
                { for entries }
            </section>
        </Layout>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BlogPostPageProps {
    pub post: BlogPost,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    let post = &props.post;
    html! {
        <Layout active={Some(Route::Blog)}>
            <article class="panel post">
                <h1>{ post.title.clone() }</h1>
                { published_line(post) }
                { for post.body.iter().map(|para| html! { <p>{ para.clone() }</p> }) }
                <p><a href={Route::Blog.to_path()}>{ t("blog.back") }</a></p>
            </article>
        </Layout>
    }
}
