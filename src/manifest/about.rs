//! About page copy.

use super::links::{
    self,
    pages,
};
use super::{
    ManifestBuilder,
    MessageDescriptor,
};
use crate::config::SiteConfig;
use crate::error::ContentError;
use crate::types::{
    Decoration,
    LinkDescriptor,
};

/// Methodology version shown wherever the copy mentions the current version.
pub const VERSION_NUMBER: &str = "2.0";

/// Declares every About page message on the builder.
pub(super) fn declare(
    builder: &mut ManifestBuilder,
    config: &SiteConfig,
) -> Result<(), ContentError> {
    page(builder)?;
    content(builder)?;
    how_to_use_tool(builder)?;
    get_involved(builder)?;
    get_involved_comments(builder)?;
    how_you_can_help(builder, config)?;
    acknowledgements(builder)?;
    Ok(())
}

/// Page title.
fn page(builder: &mut ManifestBuilder) -> Result<(), ContentError> {
    builder.section("page").insert(MessageDescriptor::new(
        "about.page.title.text",
        "About",
        "Navigate to the About page. This is the about page title text",
    ))?;
    Ok(())
}

/// Introductory paragraphs.
fn content(builder: &mut ManifestBuilder) -> Result<(), ContentError> {
    builder
        .section("content")
        .insert(
            MessageDescriptor::new(
                "about.page.paragraph.1",
                "This tool is called the Climate and Economic Justice Screening Tool. The tool \
                 has an interactive map and uses datasets that are indicators of burdens in eight \
                 categories: climate change, energy, health, housing, legacy pollution, \
                 transportation, water and wastewater, and workforce development. The tool uses \
                 this information to identify communities that are experiencing these burdens. \
                 These are the communities that are disadvantaged because they are marginalized \
                 by underinvestment and overburdened by pollution.",
                "Navigate to the About page. This is the paragraph 1",
            )
            .with_value("link1", LinkDescriptor::external(links::EXEC_ORDER_LINK))
            .with_value("italictag", Decoration::Italic),
        )?
        .insert(
            MessageDescriptor::new(
                "about.page.paragraph.2",
                "
                CEQ will update the tool, after reviewing public feedback,
                research, and the availability of new data. The current version of the
                tool is version {version}.
                ",
                "Navigate to the About page. This is the paragraph 4",
            )
            .with_value("version", VERSION_NUMBER),
        )?
        .insert(
            MessageDescriptor::new(
                "about.page.how.to.use.tool.para1",
                "
                The tool shows information about the burdens that communities experience. It \
                 uses datasets to identify indicators of burdens. The tool shows these burdens in \
                 census tracts. Census tracts are small units of geography. Census tract \
                 boundaries for <link1>statistical areas</link1> are determined by the U.S. \
                 Census Bureau once every ten years. The tool utilizes the census tract \
                 boundaries from 2010. The tool also shows land within the boundaries of \
                 Federally Recognized Tribes and point locations for Alaska Native Villages.",
                "Navigate to the About page. This is the paragraph 4",
            )
            .with_value("link1", LinkDescriptor::external(links::CENSUS_GEOGRAPHY_BOUNDARIES)),
        )?
        .insert(
            MessageDescriptor::new(
                "about.page.how.to.use.para3",
                "
                A community is considered to be disadvantaged if they are located within a \
                 census tract that meets the tool’s <link1>methodology</link1> or are on land \
                 within the boundaries of Federally Recognized Tribes.
                ",
                "Navigate to the About page. This is the paragraph 4",
            )
            .with_value("link1", LinkDescriptor::internal(pages::METHODOLOGY)),
        )?;
    Ok(())
}

/// "How to use the tool" section.
fn how_to_use_tool(builder: &mut ManifestBuilder) -> Result<(), ContentError> {
    builder
        .section("how_to_use_tool")
        .insert(MessageDescriptor::new(
            "about.page.how.to.use.tool.title",
            "How to use the tool",
            "Navigate to the About page. This is the sub heading of How to use the tool",
        ))?
        .insert(MessageDescriptor::new(
            "about.page.how.to.use.tool.para2",
            "The tool ranks most of the burdens using percentiles. Percentiles show how much \
             burden each tract experiences compared to other tracts. Certain burdens use \
             percentages or a simple yes/no.",
            "Navigate to the About page. This is the sub heading of How to use the tool paragraph1",
        ))?;
    Ok(())
}

/// "Get involved" section.
fn get_involved(builder: &mut ManifestBuilder) -> Result<(), ContentError> {
    builder
        .section("get_involved")
        .insert(MessageDescriptor::new(
            "about.page.getInvolved.title",
            "Get involved",
            "Navigate to the About page. This is the sub heading of page",
        ))?
        .insert(MessageDescriptor::new(
            "about.page.send.feedback.heading",
            "Send feedback",
            "Navigate to the About page. This is the sending feedback heading",
        ))?
        .insert(MessageDescriptor::new(
            "about.page.send.feedback.info",
            "
            Have ideas for the tool? Contact the Council on Environmental Quality’s (CEQ).
            ",
            "Navigate to the About page. This is the sending feedback information",
        ))?
        .insert(MessageDescriptor::new(
            "about.page.join.opensource.heading",
            "Join the open source community",
            "Navigate to the About page. This is the join the community heading",
        ))?
        .insert(MessageDescriptor::new(
            "about.page.join.open.source.info",
            "
            The tool’s code is open source, which means it is available for the public to view \
             and contribute to it.
            ",
            "info on Navigate to the About page. This is the joining open source community",
        ))?
        .insert(MessageDescriptor::new(
            "about.page.join.open.source.link",
            "Check it out on GitHub",
            "Navigate to the About page. This is the link to github repository",
        ))?
        .insert(MessageDescriptor::new(
            "about.page.join.open.source.link.tag",
            "New Location",
            "Tag shown next to GitHub links indicating it has a new location",
        ))?;
    Ok(())
}

/// Feedback email link.
fn get_involved_comments(builder: &mut ManifestBuilder) -> Result<(), ContentError> {
    builder.section("get_involved_comments").insert(MessageDescriptor::new(
        "about.page.send.feedback.email.link",
        "
        Contact
        ",
        "about page sub header text",
    ))?;
    Ok(())
}

/// "How you can help" list, linking the survey forms.
fn how_you_can_help(builder: &mut ManifestBuilder, config: &SiteConfig) -> Result<(), ContentError> {
    let surveys = config.survey_links();

    builder
        .section("how_you_can_help")
        .insert(MessageDescriptor::new(
            "about.page.how.you.can.help.heading",
            "How you can help improve the map",
            "Navigate to the about page. You will see How you can help",
        ))?
        .insert(
            MessageDescriptor::new(
                "about.page.how.you.can.help.list.item.1",
                "Provide <link1>general feedback</link1> on the CEJST website",
                "Navigate to the about page. You will see How you can help list item 1",
            )
            .with_value("link1", LinkDescriptor::external(&surveys.site_satisfaction.en))
            .with_value("link1es", LinkDescriptor::external(&surveys.site_satisfaction.es)),
        )?
        .insert(
            MessageDescriptor::new(
                "about.page.how.you.can.help.list.item.2",
                "Suggest new <link1>data sources</link1>.",
                "Navigate to the about page. You will see How you can help list item 2",
            )
            .with_value("link1", LinkDescriptor::external(&surveys.data.en))
            .with_value("link1es", LinkDescriptor::external(&surveys.data.es)),
        )?
        .insert(MessageDescriptor::new(
            "about.page.how.you.can.help.list.item.3",
            "Have feedback about a specific census tract? You can either click here or click \
             the “Send Feedback” button on the side-panel of a census tract on the map.",
            "Navigate to the about page. You will see How you can help list item 3",
        ))?
        .insert(
            MessageDescriptor::new(
                "about.page.how.you.can.help.list.item.4",
                "Any other questions? Email: <link1>Screeningtool-Support@omb.eop.gov</link1>.",
                "Navigate to the about page. You will see How you can help list item 3",
            )
            .with_value("link1", LinkDescriptor::internal(pages::METHODOLOGY))
            .with_value("link2", LinkDescriptor::external(&surveys.contact.en))
            .with_value("link2es", LinkDescriptor::external(&surveys.contact.es)),
        )?;
    Ok(())
}

/// Acknowledgements heading and paragraphs.
fn acknowledgements(builder: &mut ManifestBuilder) -> Result<(), ContentError> {
    builder
        .section("acknowledgements")
        .insert(MessageDescriptor::new(
            "acknowledgements.title",
            "Acknowledgements",
            "Navigate to the About page. This is the acknowledgements headingl",
        ))?
        .insert(MessageDescriptor::new(
            "acknowledgements.para1",
            "This is a placeholder for the acknowledgements paragraph",
            "Navigate to the About page. This is the subheading of acknowledgements",
        ))?;

    builder.section("acknowledgements_content").insert(MessageDescriptor::new(
        "about.page.acnowledgements.paragraph.1",
        "This is a placeholder.",
        "Navigate to the About page. This is the Acknowledgements paragraph",
    ))?;
    Ok(())
}
