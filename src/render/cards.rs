//! Card and member rendering. The emitted class names are the contract
//! with the site stylesheet; they must not change.

use crate::domain::model::{BoardMember, ClubCard, Contact};
use crate::render::fragment::{background_image, Fragment};
use crate::render::page::Container;

impl BoardMember {
    /// Render this member's info as a fragment. Pure: repeated calls
    /// build fresh, independent trees.
    pub fn render_html(&self) -> Fragment {
        let image = Fragment::new("div")
            .class("clubEBImage")
            .style("background-image", background_image(self.image_url()));

        // Email contacts become mailto links; everything else is plain text.
        let contact = match self.contact() {
            Contact::Email(address) => Fragment::new("a")
                .class("clubEBEmail")
                .attr("href", format!("mailto:{}", address))
                .text(address),
            Contact::Text(content) => Fragment::new("span").text(content),
        };

        let description = Fragment::new("div")
            .class("clubEBDescription")
            .child(Fragment::new("span").class("clubEBName").text(self.name()))
            .child(Fragment::new("span").text(self.role()))
            .child(contact);

        Fragment::new("div")
            .class("clubEBItem")
            .child(image)
            .child(description)
    }
}

impl ClubCard {
    /// Render the whole card: heading, description area, separator,
    /// then every member fragment in display order.
    pub fn render_html(&self) -> Fragment {
        let heading = Fragment::new("div").class("clubHeading").text(self.name());

        let description_area = Fragment::new("div")
            .class("clubDescriptionArea")
            .child(
                Fragment::new("div")
                    .class("clubImage")
                    .style("background-image", background_image(self.image_url())),
            )
            .child(
                Fragment::new("div")
                    .class("clubDescriptionText")
                    .text(self.description()),
            );

        let mut board = Fragment::new("div").class("clubEBoard");
        // Layout marker only; the stylesheet centers a lone member.
        if self.members().len() == 1 {
            board = board.class("singleEBMember");
        }
        for member in self.members() {
            board.append(member.render_html());
        }

        let content = Fragment::new("div")
            .class("clubContent")
            .child(description_area)
            .child(Fragment::new("div").class("clubContentSeperator"))
            .child(board);

        Fragment::new("div")
            .class("clubCard")
            .child(heading)
            .child(content)
    }

    /// Render and append as the container's last child.
    pub fn display_in(&self, container: &mut Container) {
        container.append(self.render_html());
    }
}
