use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="relative bg-gradient-to-br from-blue-600 via-purple-600 to-pink-600 text-white py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h2 class="text-5xl md:text-7xl font-bold mb-6 animate-slide-down">
                        "Step Into Style"
                    </h2>
                    <p class="text-xl md:text-2xl mb-8 text-blue-100 animate-slide-up">
                        "Discover the future of footwear with Solezza's vibrant collection"
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center animate-fade-in">
                        <a
                            href="#products"
                            class="bg-gradient-to-r from-orange-500 to-pink-500 hover:from-orange-600 hover:to-pink-600 text-white px-8 py-4 rounded-full text-lg font-semibold transition-all duration-300 transform hover:scale-105 shadow-lg"
                        >
                            "Shop Now"
                        </a>
                        <a
                            href="#products"
                            class="border-2 border-white text-white hover:bg-white hover:text-purple-600 px-8 py-4 rounded-full text-lg font-semibold transition-all duration-300 transform hover:scale-105"
                        >
                            "Explore Collection"
                        </a>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-0 left-0 w-full h-20 bg-gradient-to-t from-gray-50 to-transparent"></div>
        </section>
    }
}
