//! Static page copy

pub const OWNER_NAME: &str = "LUKE EDWARDS";
pub const OWNER_ROLE: &str = "FULLSTACK DEVELOPER";

pub mod hero {
    pub const KICKER: &str = "developer";
    pub const HEADLINE: [&str; 2] = ["FULLSTACK &", "SYSTEMS"];
    pub const BLURB: &str = "I AM A FULLSTACK DEVELOPER BASED IN VICTORIA, BC. \
        CURRENTLY SEEKING MY FIRST SOFTWARE ENGINEERING POSITION. \
        I LOVE BRUTALIST DESIGN, BASKETBALL, AND MAKING SILLY PROJECTS IN TYPESCRIPT.";
    pub const SCROLL_HINT: &str = "scroll ↓";
}

pub mod about {
    pub const HEADING: &str = "HELLO, BONJOUR";
    pub const PARAGRAPHS: [&str; 3] = [
        "BORN IN QUEBEC, CURRENTLY A 4TH YEAR COMPUTER SCIENCE STUDENT AT THE UNIVERSITY \
         OF VICTORIA, STUDYING WITH HONORS IN SOFTWARE SYSTEMS. I'M A FULLSTACK DEVELOPER \
         WITH A PASSION FOR CREATING ELEGANT SOLUTIONS TO COMPLEX PROBLEMS.",
        "I BELIEVE THE BEST WAY TO LEARN IS BY PUTTING MYSELF IN CHALLENGING SITUATIONS. \
         CURRENTLY, I AM LOOKING FOR A FULL-STACK DEVELOPER CO-OP POSITION TO GAIN \
         EXPERIENCE IN THE INDUSTRY. HOWEVER, IF YOU HAVE ANY OPPORTUNITIES, FEEL FREE \
         TO REACH OUT TO ME!",
        "WHEN I'M NOT CODING, YOU CAN FIND ME PLAYING BASKETBALL, OR WORKING ON PERSONAL \
         PROJECTS. AT THE MOMENT, I AM WORKING ON A RECIPE FINDER APPLICATION CALLED \
         KRUMBZ WITH MY FRIENDS.",
    ];
}

pub mod projects {
    pub const HEADING: &str = "PROJECTS";
    pub const VIEW_PROJECT: &str = "VIEW PROJECT →";
    pub const COMING_SOON: &str = "★ COMING SOON TO THE APP STORE";
}

pub mod contact {
    pub const HEADLINE: [&str; 2] = ["GET IN", "TOUCH WITH ME"];
    pub const FOOTER_SUFFIX: &str = "DESIGNED & BUILT WITH RUST";
    pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/luke-p-edwards/";
    pub const GITHUB_URL: &str = "https://github.com/LukeDoesJava";
    pub const EMAIL: &str = "luke0edwardss@gmail.com";
}

pub mod detail {
    pub const BACK: &str = "← BACK";
    pub const VISIT: &str = "VISIT PROJECT ↗";
    pub const OVERVIEW: &str = "PROJECT OVERVIEW";
    pub const TECHNOLOGIES: &str = "TECHNOLOGIES";
    pub const SHOWCASE: &str = "PROJECT SHOWCASE";
    pub const GITHUB: &str = "VIEW ON GITHUB ↗";
    pub const NOT_FOUND: &str = "Project Not Found";
    pub const BACK_HOME: &str = "BACK TO HOME";
}
