// Static fort image lookup.
// Stands in for an external image search service; known fort names map to
// curated URLs, everything else gets the placeholder.

const IMAGE_MAP: &[(&str, &str)] = &[
    ("Raigad Fort", "https://www.holidify.com/images/cmsuploads/compressed/shutterstock_1253730891_20191024174904.jpg"),
    ("Pratapgad Fort", "https://www.holidify.com/images/cmsuploads/compressed/Pratapgad_Fort_20181008171849.jpg"),
    ("Sinhagad Fort", "https://www.holidify.com/images/cmsuploads/compressed/shutterstock_1307889884_20191024175636.jpg"),
    ("Shivneri Fort", "https://www.holidify.com/images/cmsuploads/compressed/800px-Shivneri_Fort_0_0_20180402132205.jpg"),
    ("Torna Fort", "https://www.holidify.com/images/cmsuploads/compressed/5877_20210306213100.jpg"),
    ("Lohagad Fort", "https://www.holidify.com/images/cmsuploads/compressed/shutterstock_1453349067_20191024180410.jpg"),
    ("Harishchandragad Fort", "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c8/Harishchandragad_Konkan_Kada.jpg/1200px-Harishchandragad_Konkan_Kada.jpg"),
    ("Murud Janjira Fort", "https://www.holidify.com/images/cmsuploads/compressed/800px-Murud_janjira_2_20180406131222.jpg"),
    ("Rajmachi Fort", "https://www.holidify.com/images/cmsuploads/compressed/800px-Rajmachi_Fort_20180406110304.jpg"),
    ("Vijaydurg Fort", "https://www.holidify.com/images/cmsuploads/compressed/34137882_20180511162743.jpg"),
    ("Daulatabad Fort", "https://www.maharashtratourism.gov.in/documents/10180/14438941/Daulatabad+Fort.jpg"),
    ("Panhala Fort", "https://www.holidify.com/images/cmsuploads/compressed/shutterstock_559239738_20200123130757.jpg"),
    ("Kolaba Fort", "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d5/Alibaug_Fort.JPG/1200px-Alibaug_Fort.JPG"),
    ("Korlai Fort", "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8a/Korlai_fort_chaul.jpg/800px-Korlai_fort_chaul.jpg"),
    ("Ajinkyatara Fort", "https://www.tourismofmaharashtra.com/wp-content/uploads/2023/09/Ajinkyatara-Fort-2.jpg"),
    ("Ghangad Fort", "https://upload.wikimedia.org/wikipedia/commons/c/c1/Ghangad_Fort_from_Tail_Bailee.jpg"),
    ("Visapur Fort", "https://upload.wikimedia.org/wikipedia/commons/thumb/2/27/Visapur_Fort_entrance_view.jpg/1200px-Visapur_Fort_entrance_view.jpg"),
    ("Tikona Fort", "https://upload.wikimedia.org/wikipedia/commons/thumb/b/bf/Tikona_fort.jpg/1200px-Tikona_fort.jpg"),
    ("Mandangad Fort", "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9c/Mandangad_Fort_Maharashtra.jpg/800px-Mandangad_Fort_Maharashtra.jpg"),
    ("Sindhudurg Fort", "https://www.holidify.com/images/cmsuploads/compressed/shutterstock_665365453_20190822172015.jpg"),
];

pub const DEFAULT_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/a/ac/No_image_available.svg/480px-No_image_available.svg.png";

/// Look up an image URL for a fort name (case-insensitive substring match)
pub fn search_image(query: &str) -> &'static str {
    let query = query.to_lowercase();
    for (name, url) in IMAGE_MAP {
        if query.contains(&name.to_lowercase()) {
            return url;
        }
    }
    DEFAULT_IMAGE_URL
}
