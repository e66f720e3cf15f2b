//! Static copy for the about page and footer.

pub const APP_TITLE: &str = "Software anecdotes";

pub const ABOUT_TITLE: &str = "About anecdote app";

pub const ABOUT_INTRO: &str = "According to Wikipedia:";

pub const ABOUT_QUOTE: &str = "An anecdote is a brief, revealing account of an individual person or an incident. \
Occasionally humorous, anecdotes differ from jokes because their primary purpose is not simply to provoke laughter but to reveal a truth more general than the brief tale itself, \
such as to characterize a person by delineating a specific quirk or trait, to communicate an abstract idea about a person, place, or thing through the concrete details of a short narrative. \
An anecdote is \"a story with a point.\"";

pub const ABOUT_OUTRO: &str =
    "Software engineering is full of excellent anecdotes, at this app you can find the best and add more.";

pub const FOOTER_PREFIX: &str = "Anecdote app for";
pub const FOOTER_COURSE_LABEL: &str = "Full Stack Open";
pub const FOOTER_COURSE_URL: &str = "https://fullstackopen.com/";
pub const FOOTER_SOURCE_URL: &str =
    "https://github.com/fullstack-hy2020/routed-anecdotes/blob/master/src/App.js";
