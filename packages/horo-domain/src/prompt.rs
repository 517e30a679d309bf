use crate::{Category, Day};

/// The natal-chart inputs interpolated into every template.
#[derive(Debug, Clone, Copy)]
pub struct NatalInputs<'a> {
	pub name: &'a str,
	pub sun: &'a str,
	pub moon: &'a str,
}

/// Renders the Vietnamese instruction for `category`.
///
/// Inputs are interpolated verbatim, without escaping or trimming.
pub fn build_prompt(category: Category, natal: NatalInputs<'_>, day: Day) -> String {
	let NatalInputs { name, sun, moon } = natal;
	let day = day.label_vi();

	match category {
		Category::Daily => format!(
			"\
Bạn là một chiêm tinh gia giàu kinh nghiệm. Hãy viết lời dự đoán tổng quan cho {day} dành cho \
{name}, người có Mặt Trời ở cung {sun} và Mặt Trăng ở cung {moon}.
Yêu cầu:
- Viết bằng tiếng Việt, giọng văn ấm áp, gần gũi, xưng hô với người đọc là \"bạn\".
- Độ dài khoảng 120 đến 180 từ, chia thành 2 hoặc 3 đoạn ngắn.
- Nói về năng lượng chung, cảm xúc, sức khỏe và một lời khuyên cụ thể cho {day}.
- Không chào hỏi, không dùng emoji, không có câu mở đầu hay câu kết mang tính trang trí.
- Chỉ trả về nội dung dự đoán."
		),
		Category::Love => format!(
			"\
Bạn là một chiêm tinh gia chuyên về tình cảm. Hãy viết lời dự đoán chuyện tình duyên cho {day} \
dành cho {name}, người có Mặt Trời ở cung {sun} và Mặt Trăng ở cung {moon}.
Yêu cầu:
- Viết bằng tiếng Việt, giọng văn nhẹ nhàng, chân thành, xưng hô với người đọc là \"bạn\".
- Độ dài khoảng 120 đến 180 từ, chia thành 2 hoặc 3 đoạn ngắn.
- Nói về cảm xúc, các mối quan hệ hiện tại hoặc cơ hội gặp gỡ, và một lời khuyên cụ thể cho {day}.
- Không chào hỏi, không dùng emoji, không có câu mở đầu hay câu kết mang tính trang trí.
- Chỉ trả về nội dung dự đoán."
		),
		Category::Work => format!(
			"\
Bạn là một chiêm tinh gia chuyên về sự nghiệp. Hãy viết lời dự đoán công việc và tài chính cho \
{day} dành cho {name}, người có Mặt Trời ở cung {sun} và Mặt Trăng ở cung {moon}.
Yêu cầu:
- Viết bằng tiếng Việt, giọng văn rõ ràng, thực tế, xưng hô với người đọc là \"bạn\".
- Độ dài khoảng 120 đến 180 từ, chia thành 2 hoặc 3 đoạn ngắn.
- Nói về hiệu suất làm việc, quan hệ đồng nghiệp, tiền bạc và một lời khuyên cụ thể cho {day}.
- Không chào hỏi, không dùng emoji, không có câu mở đầu hay câu kết mang tính trang trí.
- Chỉ trả về nội dung dự đoán."
		),
		Category::LoveMetrics => format!(
			"\
Bạn là một chiêm tinh gia chuyên về tình cảm. Dựa trên Mặt Trời cung {sun} và Mặt Trăng cung \
{moon} của {name}, hãy đánh giá vận tình duyên {day}.
Chỉ trả về đúng một đối tượng JSON theo mẫu sau:
{{\"love_luck\": <số nguyên từ 0 đến 100>, \"best_match\": \"<tên một trong 12 cung hoàng đạo bằng \
tiếng Việt>\", \"compatibility\": <số nguyên từ 50 đến 100>, \"quote\": \"<một câu ngắn về tình \
yêu bằng tiếng Việt>\"}}
Không giải thích, không dùng markdown, không viết bất kỳ nội dung nào ngoài JSON."
		),
	}
}
