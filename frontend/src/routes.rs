use dioxus::prelude::*;

use common::url_state::CatalogLocation;

use crate::components::navbar::Navbar;
use crate::pages::about_page::AboutPage;
use crate::pages::contact_page::ContactPage;
use crate::pages::course_detail_page::CourseDetailPage;
use crate::pages::courses_page::CoursesPage;
use crate::pages::home_page::HomePage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::success_page::SuccessPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/courses?:..location")]
    CoursesPage { location: CatalogLocation },


    #[route("/course/:id")]
    CourseDetailPage { id: String },


    #[route("/about")]
    AboutPage {},

    #[route("/contact")]
    ContactPage {},

    #[route("/success")]
    SuccessPage {},

    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },

}

impl Route {
    pub fn all_courses() -> Self {
        Self::CoursesPage { location: CatalogLocation::default() }
    }

    pub fn courses_in_category(category: impl Into<String>) -> Self {
        Self::CoursesPage { location: CatalogLocation::for_category(category) }
    }

    pub fn course_detail(id: impl Into<String>) -> Self {
        Self::CourseDetailPage { id: id.into() }
    }
}
