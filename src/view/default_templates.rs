// Used when the template directory does not provide its own file.

pub const HOME_TPL: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{site_title}}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<h1>{{site_title}}</h1>
<ul class="posts">
{{#post_list}}<li><a href="{{link}}">{{title}}</a> - {{date}}<div class="summary">{{{summary}}}</div></li>
{{/post_list}}</ul>
{{#show_pagination}}<nav class="pages">{{#page_list}}<a href="{{link}}"{{#current}} class="current"{{/current}}>{{number}}</a> {{/page_list}}</nav>{{/show_pagination}}
<nav class="tags">{{#tags}}<a href="/tags/{{url}}">{{tag}}</a> ({{count}}) {{/tags}}</nav>
</body>
</html>
"##;

pub const TAG_TPL: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{tag}} - {{site_title}}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<h1>Posts tagged {{tag}}</h1>
<ul class="posts">
{{#post_list}}<li><a href="{{link}}">{{title}}</a> - {{date}}<div class="summary">{{{summary}}}</div></li>
{{/post_list}}</ul>
{{#show_pagination}}<nav class="pages">{{#page_list}}<a href="{{link}}"{{#current}} class="current"{{/current}}>{{number}}</a> {{/page_list}}</nav>{{/show_pagination}}
<a href="/">All posts</a>
</body>
</html>
"##;

pub const POST_TPL: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}} - {{site_title}}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<article>
<h1>{{title}}</h1>
<p>Date: {{date}}</p>
<ul class="tags">{{#tags}}<li><a href="/tags/{{url}}">{{tag}}</a></li>{{/tags}}</ul>
<div class="content">{{{content}}}</div>
</article>
<a href="/">Back to all posts</a>
</body>
</html>
"##;

pub const NOT_FOUND_TPL: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Not Found - {{site_title}}</title>
</head>
<body>
<h1>404 - Post Not Found</h1>
<p><a href="/">Back to all posts</a></p>
</body>
</html>
"##;
